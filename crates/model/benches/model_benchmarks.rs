//! Benchmarks for ratiolens-model decomposition.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;
use ratiolens_model::{DEFAULT_TOLERANCE, DUPONT_3, DUPONT_5, check_identity, sequential_attribution};
use ratiolens_primitives::{CompanyProfile, RatioSeries, Unit};

fn random_factors(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.r#gen::<f64>() * 2.0 + 0.1).collect()
}

fn random_dupont_profile(n_periods: usize) -> CompanyProfile {
    let mut rng = rand::thread_rng();
    let periods = (0..n_periods).map(|i| format!("FY-{i}").into()).collect();
    let mut profile = CompanyProfile::new("BENCH", periods);

    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::with_capacity(n_periods); 3];
    let mut roe = Vec::with_capacity(n_periods);
    for _ in 0..n_periods {
        let npm = rng.r#gen::<f64>() * 0.3;
        let at = rng.r#gen::<f64>() * 0.5 + 0.1;
        let em = rng.r#gen::<f64>() * 3.0 + 1.0;
        columns[0].push(Some(npm));
        columns[1].push(Some(at));
        columns[2].push(Some(em));
        roe.push(Some(npm * at * em));
    }

    for (name, values) in DUPONT_3.factor_names().iter().zip(columns) {
        profile
            .insert_series(DUPONT_3.category(), RatioSeries::new(*name, Unit::Ratio, values))
            .unwrap();
    }
    profile
        .insert_series(DUPONT_3.category(), RatioSeries::new("ROE", Unit::Ratio, roe))
        .unwrap();
    profile
}

fn bench_sequential_attribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_attribution");

    for (identity, name) in [(&DUPONT_3, "3-factor"), (&DUPONT_5, "5-factor")] {
        group.bench_with_input(BenchmarkId::from_parameter(name), identity, |b, identity| {
            let factors = random_factors(identity.n_factors());
            b.iter(|| sequential_attribution(black_box(identity), black_box(&factors)).unwrap());
        });
    }

    group.finish();
}

fn bench_check_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_identity");

    for n_periods in [9, 40, 200] {
        group.throughput(Throughput::Elements(n_periods as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_periods),
            &n_periods,
            |b, &n_periods| {
                let profile = random_dupont_profile(n_periods);
                b.iter(|| {
                    check_identity(black_box(&profile), &DUPONT_3, DEFAULT_TOLERANCE).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_attribution, bench_check_identity);
criterion_main!(benches);
