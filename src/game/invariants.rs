//! Game invariants - sanity checks that detect bugs.
//!
//! The rules in [`GameState`] keep all of these true between actions. A
//! violation means a rule was implemented wrong, or a state was built or
//! deserialized by hand without going through the rules.

use crate::game::{GameState, Player, BOAT_LENGTH};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut push = |message: String| violations.push(InvariantViolation { message });

    for player in Player::BOTH {
        let own = state.player(player);
        let boat = &own.boat;

        if !boat.fits(state.grid_size) {
            push(format!(
                "{player} boat at {} {} leaves the {}x{} grid",
                boat.anchor, boat.orientation, state.grid_size, state.grid_size
            ));
        }

        if let Some(idx) = boat.hit_indices().find(|&idx| idx >= BOAT_LENGTH) {
            push(format!("{player} boat has hit index {idx} >= {BOAT_LENGTH}"));
        }

        if boat.is_sunk() {
            let opponent = player.opponent();
            if !state.is_game_over || state.winner != Some(opponent) {
                push(format!(
                    "{player} boat is sunk but {opponent} has not been declared winner"
                ));
            }
        }

        for shot in own.shots() {
            if !shot.position.in_bounds(state.grid_size) {
                push(format!("{player} shot at {} is off the grid", shot.position));
            }
        }

        // Two hits can strike the same cell index if the boat moved in
        // between, so damage is bounded by hits landed, not equal to it.
        let landed = state.player(player.opponent()).hits_landed();
        if boat.hit_count() > landed {
            push(format!(
                "{player} boat has {} hits but opponent landed only {landed}",
                boat.hit_count()
            ));
        }
    }

    let first = state.player(Player::Player1).boat.cells();
    let second = state.player(Player::Player2).boat.cells();
    let collided = state.is_game_over && state.winner.is_some_and(|winner| {
        // A losing collision leaves the boats overlapping.
        !state.player(winner.opponent()).boat.is_sunk()
    });
    if !collided {
        if let Some(cell) = first.iter().find(|cell| second.contains(cell)) {
            push(format!("boats overlap at {cell}"));
        }
    }

    if state.is_game_over != state.win_reason.is_some() {
        push(format!(
            "is_game_over is {} but win_reason is {:?}",
            state.is_game_over, state.win_reason
        ));
    }
    if state.is_game_over != state.winner.is_some() {
        push(format!(
            "is_game_over is {} but winner is {:?}",
            state.is_game_over, state.winner
        ));
    }
    if state.turn_number == 0 {
        push("turn_number is 0".to_string());
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Boat, Direction, Orientation, Position};

    fn create_test_game() -> GameState {
        GameState::from_boats(
            10,
            Boat::new(Position::new(0, 0), Orientation::Horizontal),
            Boat::new(Position::new(5, 5), Orientation::Vertical),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_game_clean() {
        assert!(check_invariants(&create_test_game()).is_empty());
    }

    #[test]
    fn test_after_collision_clean() {
        let mut game = GameState::from_boats(
            10,
            Boat::new(Position::new(5, 2), Orientation::Horizontal),
            Boat::new(Position::new(4, 5), Orientation::Vertical),
        )
        .unwrap();
        game.move_boat(Player::Player1, Direction::Right, 1);
        assert!(game.is_game_over);
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_detects_overlap() {
        let mut game = create_test_game();
        game.players[0].boat.relocate(Position::new(6, 4));
        let violations = check_invariants(&game);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("overlap"));
    }

    #[test]
    fn test_detects_boat_off_grid() {
        let mut game = create_test_game();
        game.players[1].boat.relocate(Position::new(9, 5));
        assert!(
            check_invariants(&game)
                .iter()
                .any(|v| v.message.contains("leaves"))
        );
    }

    #[test]
    fn test_detects_unreported_sink() {
        let mut game = create_test_game();
        for idx in 0..BOAT_LENGTH {
            game.players[1].boat.strike(idx);
        }
        let violations = check_invariants(&game);
        assert!(violations.iter().any(|v| v.message.contains("sunk")));
        assert!(violations.iter().any(|v| v.message.contains("landed only")));
    }

    #[test]
    fn test_detects_missing_reason() {
        let mut game = create_test_game();
        game.is_game_over = true;
        game.winner = Some(Player::Player1);
        assert!(
            check_invariants(&game)
                .iter()
                .any(|v| v.message.contains("win_reason"))
        );
    }
}
