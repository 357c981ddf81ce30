//! Results of player actions.
//!
//! Every action returns a value describing what happened. A rule violation
//! is a [`Rejection`] carried inside an unsuccessful result, never an error
//! or a panic, and it leaves the game untouched.

use serde::Serialize;
use thiserror::Error;

use crate::game::{Direction, Player, Position};

/// Why an action was refused.
///
/// The `Display` text is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// The match has already ended.
    #[error("game is already over")]
    GameOver,

    /// The acting player does not hold the turn.
    #[error("it is not {actor}'s turn ({expected} to move)")]
    NotYourTurn {
        /// Player who tried to act.
        actor: Player,
        /// Player who holds the turn.
        expected: Player,
    },

    /// Fire target is off the grid.
    #[error("target {target} is outside the {grid_size}x{grid_size} grid")]
    TargetOutOfBounds {
        /// Requested target.
        target: Position,
        /// Side length of the grid.
        grid_size: u8,
    },

    /// Fire target was already shot at by this player.
    #[error("already fired at {target}")]
    AlreadyFired {
        /// Requested target.
        target: Position,
    },

    /// Move distance outside `1..=2`.
    #[error("boats move 1 or 2 spaces, not {spaces}")]
    InvalidDistance {
        /// Requested distance.
        spaces: u8,
    },

    /// The moved boat would leave the grid.
    #[error("moving {direction} {spaces} would take the boat off the grid")]
    MoveOutOfBounds {
        /// Requested direction.
        direction: Direction,
        /// Requested distance.
        spaces: u8,
    },
}

/// Result of a fire action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FireResult {
    /// Whether the shot was taken.
    pub success: bool,
    /// Whether it struck the opposing boat.
    pub hit: bool,
    /// Whether it sank the opposing boat and ended the game.
    pub sunk: bool,
    /// Distinct hits on the opposing boat after this shot.
    pub hit_count: usize,
    /// Human-readable description.
    pub message: String,
    /// Reason for refusal, when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl FireResult {
    pub(crate) fn rejected(rejection: Rejection) -> Self {
        Self {
            success: false,
            hit: false,
            sunk: false,
            hit_count: 0,
            message: capitalize(&rejection.to_string()),
            rejection: Some(rejection),
        }
    }

    pub(crate) fn miss(target: Position) -> Self {
        Self {
            success: true,
            hit: false,
            sunk: false,
            hit_count: 0,
            message: format!("Miss at {target}."),
            rejection: None,
        }
    }

    pub(crate) fn hit(target: Position, hit_count: usize, needed: usize) -> Self {
        Self {
            success: true,
            hit: true,
            sunk: false,
            hit_count,
            message: format!("Hit at {target}! {hit_count}/{needed} hits on the enemy boat."),
            rejection: None,
        }
    }

    pub(crate) fn sunk(target: Position, hit_count: usize, winner: Player) -> Self {
        Self {
            success: true,
            hit: true,
            sunk: true,
            hit_count,
            message: format!("Hit at {target}! The enemy boat is sunk. {winner} wins."),
            rejection: None,
        }
    }
}

/// Result of a move action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    /// Whether the move was carried out.
    pub success: bool,
    /// Whether the boat rammed the opposing boat, losing the game.
    pub collision: bool,
    /// Boat anchor after the move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Position>,
    /// Human-readable description.
    pub message: String,
    /// Reason for refusal, when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl MoveResult {
    pub(crate) fn rejected(rejection: Rejection) -> Self {
        Self {
            success: false,
            collision: false,
            anchor: None,
            message: capitalize(&rejection.to_string()),
            rejection: Some(rejection),
        }
    }

    pub(crate) fn moved(direction: Direction, spaces: u8, anchor: Position) -> Self {
        Self {
            success: true,
            collision: false,
            anchor: Some(anchor),
            message: format!("Boat moved {direction} {spaces}; anchor now at {anchor}."),
            rejection: None,
        }
    }

    pub(crate) fn collided(mover: Player, anchor: Position) -> Self {
        Self {
            success: true,
            collision: true,
            anchor: Some(anchor),
            message: format!(
                "{mover} rammed the enemy boat at {anchor}! {} wins.",
                mover.opponent()
            ),
            rejection: None,
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_fire_shape() {
        let result = FireResult::rejected(Rejection::AlreadyFired {
            target: Position::new(2, 3),
        });
        assert!(!result.success);
        assert!(!result.hit);
        assert!(!result.sunk);
        assert_eq!(result.message, "Already fired at (2, 3)");
    }

    #[test]
    fn test_not_your_turn_message() {
        let rejection = Rejection::NotYourTurn {
            actor: Player::Player2,
            expected: Player::Player1,
        };
        assert_eq!(
            rejection.to_string(),
            "it is not player2's turn (player1 to move)"
        );
    }

    #[test]
    fn test_fire_json_omits_rejection_on_success() {
        let json = serde_json::to_value(FireResult::miss(Position::new(0, 0))).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("rejection").is_none());
    }

    #[test]
    fn test_rejection_json_tag() {
        let json = serde_json::to_value(MoveResult::rejected(Rejection::InvalidDistance {
            spaces: 3,
        }))
        .unwrap();
        assert_eq!(json["rejection"]["kind"], "invalid_distance");
        assert_eq!(json["rejection"]["spaces"], 3);
    }

    #[test]
    fn test_collision_message_names_winner() {
        let result = MoveResult::collided(Player::Player1, Position::new(4, 4));
        assert!(result.success);
        assert!(result.collision);
        assert!(result.message.contains("player2 wins"));
    }
}
