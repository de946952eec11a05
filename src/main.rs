use clap::Parser;
use log::{error, LevelFilter};
use stride::coord::Coord;
use stride::scenario::{Scenario, Variant};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How p1.y is derived from p2 and p3
    #[arg(long, value_enum, default_value_t = Variant::Object)]
    variant: Variant,

    /// Starting position of p1
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true, default_value = "55,47")]
    p1: Coord,

    /// Starting position of p2
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true, default_value = "9,74")]
    p2: Coord,

    /// Starting position of p3
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true, default_value = "10,25")]
    p3: Coord,

    /// Log every step of the script
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let scenario = Scenario {
        variant: cli.variant,
        p1: cli.p1,
        p2: cli.p2,
        p3: cli.p3,
    };
    match scenario.run() {
        Ok(outcome) => {
            println!("p1: {}", outcome.p1.position());
            println!("p2: {}", outcome.p2.position());
            println!("p3: {}", outcome.p3.position());
            println!("check: {}", outcome.check);
            std::process::exit(outcome.check);
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

#[test]
fn test_negative_coords() {
    let args = ["stride", "--p1", "-3,4", "--p2", "-9,-74", "-v"];
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.p1, Coord::new(-3, 4));
    assert_eq!(cli.p2, Coord::new(-9, -74));
    assert_eq!(cli.p3, Coord::new(10, 25));
    assert!(cli.verbose);

    let cli = Cli::try_parse_from(["stride", "--p3=-1,2"]).unwrap();
    assert_eq!(cli.p3, Coord::new(-1, 2));
}
