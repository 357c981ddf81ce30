//! Benchmarks for match setup and the per-action hot path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use broadside::{Direction, Engine, GameConfig, Player, Position};

fn bench_new_game(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("new_game_seeded", |b| {
        b.iter(|| {
            let engine = Engine::with_seed(black_box(config), black_box(42)).unwrap();
            black_box(engine)
        });
    });
}

fn bench_full_match(c: &mut Criterion) {
    let config = GameConfig::default();

    // Both players sweep the grid row-major; the first to find the enemy
    // boat three times wins.
    c.bench_function("sweep_match", |b| {
        b.iter(|| {
            let mut engine = Engine::with_seed(config, 7).unwrap();
            let cells = (0..10i16).flat_map(|row| (0..10i16).map(move |col| Position::new(row, col)));
            for cell in cells {
                if engine.is_game_over() {
                    break;
                }
                engine.fire(Player::Player1, cell);
                engine.fire(Player::Player2, cell);
            }
            black_box(engine.history().len())
        });
    });
}

fn bench_player_view(c: &mut Criterion) {
    let mut engine = Engine::with_seed(GameConfig::default(), 3).unwrap();
    let targets = (0..10i16).flat_map(|row| [Position::new(row, 0), Position::new(row, 5)]);
    for (target, &direction) in targets.zip(Direction::ALL.iter().cycle()) {
        let player = engine.current_turn();
        engine.fire(player, target);
        let player = engine.current_turn();
        engine.move_boat(player, direction, 1);
    }

    c.bench_function("player_view", |b| {
        b.iter(|| black_box(engine.player_view(black_box(Player::Player1))));
    });

    c.bench_function("briefing", |b| {
        b.iter(|| black_box(engine.briefing(black_box(Player::Player2))));
    });
}

criterion_group!(benches, bench_new_game, bench_full_match, bench_player_view);
criterion_main!(benches);
