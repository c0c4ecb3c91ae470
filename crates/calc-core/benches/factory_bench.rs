use calc_core::{CalculationFactory, CalculationType};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use uuid::Uuid;

fn bench_create_and_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_and_evaluate");
    let user_id = Uuid::new_v4();

    for size in [2_usize, 16, 256] {
        let inputs: Vec<f64> = (1..=size).map(|i| i as f64).collect();
        for kind in CalculationType::ALL {
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &inputs, |b, inputs| {
                b.iter(|| {
                    let calc =
                        CalculationFactory::create(kind.as_str(), user_id, inputs.as_slice())
                            .unwrap();
                    black_box(calc.get_result().unwrap())
                })
            });
        }
    }
    group.finish();
}

fn bench_unsupported_lookup(c: &mut Criterion) {
    let user_id = Uuid::new_v4();
    c.bench_function("unsupported_lookup", |b| {
        b.iter(|| black_box(CalculationFactory::create("Modulus", user_id, vec![1.0, 2.0]).is_err()))
    });
}

criterion_group!(benches, bench_create_and_evaluate, bench_unsupported_lookup);
criterion_main!(benches);
