use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn tiers() -> [(&'static str, GameConfig); 4] {
    [
        ("beginner", GameConfig::beginner()),
        ("intermediate", GameConfig::intermediate()),
        ("expert", GameConfig::expert()),
        ("expert-dense", GameConfig::new_unchecked((16, 30), 479)),
    ]
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in tiers() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut generator = RandomMineGenerator::new(0x5eed);
            b.iter(|| black_box(generator.generate(config)));
        });
    }
    group.finish();
}

fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("init");
    for (name, config) in tiers() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut generator = RandomMineGenerator::new(0x5eed);
            let mut board = Board::new();
            b.iter(|| {
                board
                    .init_with(config, &mut generator)
                    .expect("preset configs are valid");
                black_box(board.total_mines())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_init);
criterion_main!(benches);
