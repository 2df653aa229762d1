use criterion::{criterion_group, criterion_main, Criterion};

use banana_blockade::config::Config;
use banana_blockade::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_two_bananas(c: &mut Criterion) {
    bench_level(c, "levels/04-two-bananas.txt", 100);
}

#[allow(unused)]
fn bench_detour(c: &mut Criterion) {
    // banana has to go around an obstacle with boxes in the way
    bench_level(c, "levels/06-detour.txt", 50);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // exhausts the whole state space
    bench_level(c, "levels/05-boxes-in-the-way.txt", 100);
}

fn bench_level(c: &mut Criterion, level_path: &str, samples: usize) {
    let board = level_path.load_level().unwrap();

    let mut group = c.benchmark_group("solve");
    group.sample_size(samples);
    group.bench_function(level_path, |b| {
        b.iter(|| criterion::black_box(board.solve(criterion::black_box(Config::default()))))
    });
    group.finish();
}

criterion_group!(benches, bench_two_bananas, bench_detour, bench_no_solution);
criterion_main!(benches);
