use centum_math::{requantize, round, settle_nearest_five_cents, RoundingMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_round(c: &mut Criterion) {
    let values: Vec<i64> = (-5_000..5_000).map(|v| v * 7_919 + 5).collect();

    let mut group = c.benchmark_group("round");
    for mode in RoundingMode::ALL {
        group.bench_function(mode.to_string(), |b| {
            b.iter(|| {
                values
                    .iter()
                    .fold(0_i64, |acc, &v| acc.wrapping_add(round(black_box(v), mode)))
            })
        });
    }
    group.finish();

    c.bench_function("requantize_half_even", |b| {
        b.iter(|| {
            values.iter().fold(0_i64, |acc, &v| {
                acc.wrapping_add(requantize(black_box(v), RoundingMode::HalfEven))
            })
        })
    });

    c.bench_function("settle_nearest_five_cents", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(0_i64, |acc, &v| acc.wrapping_add(settle_nearest_five_cents(black_box(v))))
        })
    });
}

criterion_group!(benches, bench_round);
criterion_main!(benches);
