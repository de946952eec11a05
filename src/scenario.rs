//! The scripted sample run over three entities.
//!
//! The script moves two entities, derives the third from their products
//! and quotients, and folds the final `x` coordinates into a single check
//! value. Every step of the script is checked before it is applied, so a
//! zero divisor or an overflowing move or product is reported as an error
//! instead of panicking or wrapping.

use crate::coord::Coord;
use crate::entity::Entity;
use clap::ValueEnum;
use log::{debug, info};
use std::fmt;
use thiserror::Error;

/// How `p1.y` is derived from the other two entities.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Variant {
    /// `p2.y * p3.y`
    #[default]
    Object,
    /// `p2.y / p3.y`
    Procedural,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    MoveRight,
    MoveDown,
    SetX,
    SetYProduct,
    SetYQuotient,
    MoveLeft,
    MoveUp,
    Check,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Step::*;
        f.write_str(match self {
            MoveRight => "p2.move_right(5)",
            MoveDown => "p3.move_down(5)",
            SetX => "p1.x = p2.x * p3.x",
            SetYProduct => "p1.y = p2.y * p3.y",
            SetYQuotient => "p1.y = p2.y / p3.y",
            MoveLeft => "p1.move_left(p2.x / 2)",
            MoveUp => "p1.move_up(p2.y / 2)",
            Check => "p1.x * p2.x * p3.x",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("division by zero in `{step}`")]
    DivisionByZero { step: Step },
    #[error("arithmetic overflow in `{step}`")]
    Overflow { step: Step },
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Scenario {
    pub variant: Variant,
    pub p1: Coord,
    pub p2: Coord,
    pub p3: Coord,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            variant: Variant::Object,
            p1: Coord::new(55, 47),
            p2: Coord::new(9, 74),
            p3: Coord::new(10, 25),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub p1: Entity,
    pub p2: Entity,
    pub p3: Entity,
    pub check: i32,
}

fn add(a: i32, b: i32, step: Step) -> Result<i32> {
    a.checked_add(b).ok_or(ScenarioError::Overflow { step })
}

fn sub(a: i32, b: i32, step: Step) -> Result<i32> {
    a.checked_sub(b).ok_or(ScenarioError::Overflow { step })
}

fn mul(a: i32, b: i32, step: Step) -> Result<i32> {
    a.checked_mul(b).ok_or(ScenarioError::Overflow { step })
}

fn div(a: i32, b: i32, step: Step) -> Result<i32> {
    if b == 0 {
        return Err(ScenarioError::DivisionByZero { step });
    }
    // i32::MIN / -1
    a.checked_div(b).ok_or(ScenarioError::Overflow { step })
}

impl Scenario {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn run(&self) -> Result<Outcome> {
        let mut p1 = Entity::from(self.p1);
        let mut p2 = Entity::from(self.p2);
        let mut p3 = Entity::from(self.p3);
        debug!(
            "start ({:?}): p1={} p2={} p3={}",
            self.variant,
            p1.position(),
            p2.position(),
            p3.position()
        );

        // moves are checked here, the entity itself never guards them
        add(p2.x(), 5, Step::MoveRight)?;
        p2.move_right(5);
        add(p3.y(), 5, Step::MoveDown)?;
        p3.move_down(5);
        debug!("p2={} p3={}", p2.position(), p3.position());

        p1.set_x(mul(p2.x(), p3.x(), Step::SetX)?);
        p1.set_y(match self.variant {
            Variant::Object => mul(p2.y(), p3.y(), Step::SetYProduct)?,
            Variant::Procedural => div(p2.y(), p3.y(), Step::SetYQuotient)?,
        });
        debug!("p1={}", p1.position());

        let left = div(p2.x(), 2, Step::MoveLeft)?;
        sub(p1.x(), left, Step::MoveLeft)?;
        p1.move_left(left);
        let up = div(p2.y(), 2, Step::MoveUp)?;
        sub(p1.y(), up, Step::MoveUp)?;
        p1.move_up(up);
        debug!("p1={}", p1.position());

        let check = mul(
            mul(p1.x(), p2.x(), Step::Check)?,
            p3.x(),
            Step::Check,
        )?;
        info!("check value {check}");

        Ok(Outcome { p1, p2, p3, check })
    }
}

#[test]
fn test_object() {
    let outcome = Scenario::new(Variant::Object).run().unwrap();
    assert_eq!(outcome.p2.position(), Coord::new(14, 74));
    assert_eq!(outcome.p3.position(), Coord::new(10, 30));
    assert_eq!(outcome.p1.position(), Coord::new(133, 2183));
    assert_eq!(outcome.check, 18620);
}

#[test]
fn test_procedural() {
    let outcome = Scenario::new(Variant::Procedural).run().unwrap();
    assert_eq!(outcome.p1.position(), Coord::new(133, -35));
    assert_eq!(outcome.check, 18620);
}

#[test]
fn test_division_by_zero() {
    let scenario = Scenario {
        variant: Variant::Procedural,
        p3: Coord::new(10, -5),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::DivisionByZero {
            step: Step::SetYQuotient
        })
    );
    // the object variant never divides by p3.y
    assert!(Scenario {
        variant: Variant::Object,
        ..scenario
    }
    .run()
    .is_ok());
}

#[test]
fn test_overflow() {
    let scenario = Scenario {
        p2: Coord::new(i32::MAX - 5, 74),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::Overflow { step: Step::SetX })
    );
}

#[test]
fn test_move_overflow() {
    let scenario = Scenario {
        p2: Coord::new(i32::MAX, 0),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::Overflow {
            step: Step::MoveRight
        })
    );

    let scenario = Scenario {
        p3: Coord::new(0, i32::MAX - 4),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::Overflow {
            step: Step::MoveDown
        })
    );

    // p1.y = 2 * -2^30 = i32::MIN, then moves up by 1
    let scenario = Scenario {
        p2: Coord::new(9, 2),
        p3: Coord::new(10, i32::MIN / 2 - 5),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::Overflow { step: Step::MoveUp })
    );

    // p1.x = 2 * -2^30 = i32::MIN, then moves left by 1
    let scenario = Scenario {
        p2: Coord::new(-3, 0),
        p3: Coord::new(i32::MIN / 2, 0),
        ..Default::default()
    };
    assert_eq!(
        scenario.run(),
        Err(ScenarioError::Overflow {
            step: Step::MoveLeft
        })
    );
}
