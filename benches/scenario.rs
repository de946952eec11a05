use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stride::scenario::{Scenario, Variant};

fn run_scenario(c: &mut Criterion) {
    let object = Scenario::new(Variant::Object);
    let procedural = Scenario::new(Variant::Procedural);
    c.bench_function("scenario_object", |b| b.iter(|| black_box(&object).run()));
    c.bench_function("scenario_procedural", |b| {
        b.iter(|| black_box(&procedural).run())
    });
}

criterion_group!(benches, run_scenario);
criterion_main!(benches);
