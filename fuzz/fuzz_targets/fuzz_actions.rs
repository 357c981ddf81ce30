#![no_main]

//! Match action fuzzer.
//!
//! Plays a seeded match from an arbitrary action sequence, including actions
//! out of turn, off the grid and after the game has ended, and checks:
//! 1. No action panics
//! 2. Refused actions leave the state untouched
//! 3. All invariants hold after every action
//! 4. Player views and the full state always serialize

use arbitrary::Arbitrary;
use broadside::game::check_invariants;
use broadside::{Direction, Engine, GameConfig, Player, Position};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated action.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzAction {
    /// Fire at a cell; coordinates may be off the grid.
    Fire { as_player2: bool, row: i8, col: i8 },
    /// Move the boat; distance may be invalid.
    Move { as_player2: bool, direction: u8, spaces: u8 },
    /// Start a new match.
    Reset,
}

/// Structured input for match fuzzing.
#[derive(Arbitrary, Debug)]
struct MatchInput {
    /// Grid side length (clamped to the valid range).
    grid_size: u8,
    /// Minimum spawn distance.
    min_spawn_distance: u8,
    /// Placement seed.
    seed: u64,
    /// Actions to apply.
    actions: Vec<FuzzAction>,
}

fn player(as_player2: bool) -> Player {
    if as_player2 { Player::Player2 } else { Player::Player1 }
}

fuzz_target!(|input: MatchInput| {
    let config = GameConfig {
        grid_size: input.grid_size.clamp(3, 26),
        min_spawn_distance: input.min_spawn_distance,
        max_spawn_attempts: 20,
    };
    let Ok(mut engine) = Engine::with_seed(config, input.seed) else {
        return;
    };

    for action in input.actions.into_iter().take(200) {
        let before = engine.state();
        let success = match action {
            FuzzAction::Fire { as_player2, row, col } => {
                let target = Position::new(i16::from(row), i16::from(col));
                engine.fire(player(as_player2), target).success
            }
            FuzzAction::Move { as_player2, direction, spaces } => {
                let direction = Direction::ALL[usize::from(direction % 4)];
                engine.move_boat(player(as_player2), direction, spaces).success
            }
            FuzzAction::Reset => {
                engine.reset();
                true
            }
        };

        let after = engine.state();
        if !success {
            assert_eq!(after, before, "refused {action:?} changed the state");
        }

        let violations = check_invariants(&after);
        assert!(violations.is_empty(), "after {action:?}: {violations:?}");

        for player in Player::BOTH {
            serde_json::to_string(&engine.player_view(player)).unwrap();
        }
        serde_json::to_string(&after).unwrap();
    }
});
