use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gensudoku::{grid::Grid, propagator, rng::RandomNumberGenerator, Population};

fn easy_puzzle() -> Grid {
    Grid::parse(
        "530070000\
         600195000\
         098000060\
         800060003\
         400803001\
         700020006\
         060000280\
         000419005\
         000080079",
    )
    .unwrap()
}

fn hard_puzzle() -> Grid {
    Grid::parse(
        "100007090\
         030020008\
         009600500\
         005300900\
         010080002\
         600004000\
         300000010\
         040000007\
         007000300",
    )
    .unwrap()
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");
    group.bench_function("easy_puzzle", |b| {
        let puzzle = easy_puzzle();
        b.iter(|| propagator::preprocess(black_box(&puzzle)))
    });
    group.bench_function("hard_puzzle", |b| {
        let puzzle = hard_puzzle();
        b.iter(|| propagator::preprocess(black_box(&puzzle)))
    });
    group.finish();
}

fn bench_seeding(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeding");
    for size in [10, 100, 1000].iter() {
        group.bench_function(&format!("seed_{}", size), |b| {
            let puzzle = hard_puzzle();
            let mut rng = RandomNumberGenerator::from_seed(42);
            b.iter(|| {
                let mut population = Population::new();
                let result = population.seed(*size, black_box(&puzzle), &mut rng);
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_preprocess, bench_seeding);
criterion_main!(benches);
