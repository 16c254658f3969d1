use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for side in [16u8, 64, 255] {
        let config = GameConfig::with_default_density(side).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut game = Game::new(config, seed);
                black_box(game.on_reveal((side / 2, side / 2)))
            });
        });
    }
    group.finish();
}

fn open_board_flood(c: &mut Criterion) {
    // a single corner mine leaves almost the whole board to one flood
    let grid = Grid::from_mine_coords(255, &[(254, 254)]).unwrap();
    c.bench_function("open_board_flood", |b| {
        b.iter(|| {
            let mut game = Game::with_grid(grid.clone(), 0);
            black_box(game.on_reveal((0, 0)))
        });
    });
}

criterion_group!(benches, first_reveal, open_board_flood);
criterion_main!(benches);
