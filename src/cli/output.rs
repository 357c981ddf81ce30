//! Output formatting utilities for CLI.

#![allow(clippy::format_push_string)]

use broadside::game::BOAT_LENGTH;
use broadside::{ActionRecord, FireResult, GameConfig, GameState, MoveResult, Player};
use serde::Serialize;

/// Result of one applied action.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub(super) enum StepResult {
    /// A fire action.
    Fire(FireResult),
    /// A move action.
    Move(MoveResult),
}

impl StepResult {
    /// Whether the action was carried out.
    pub(super) fn success(&self) -> bool {
        match self {
            Self::Fire(result) => result.success,
            Self::Move(result) => result.success,
        }
    }

    /// Message returned to the player.
    pub(super) fn message(&self) -> &str {
        match self {
            Self::Fire(result) => &result.message,
            Self::Move(result) => &result.message,
        }
    }
}

/// One scripted action and its outcome.
#[derive(Debug, Clone, Serialize)]
pub(super) struct Step {
    /// Script line number, starting at 1.
    pub(super) line: usize,
    /// Round the action was attempted in.
    pub(super) turn_number: u32,
    /// Acting player.
    pub(super) player: Player,
    /// Command text as written.
    pub(super) command: String,
    /// What happened.
    pub(super) result: StepResult,
}

/// JSON-serializable match result.
#[derive(Debug, Serialize)]
pub(super) struct JsonGameResult<'a> {
    /// Random seed used.
    pub(super) seed: u64,
    /// Configuration the match was set up with.
    pub(super) config: GameConfig,
    /// Whether the match has ended.
    pub(super) is_game_over: bool,
    /// Winner, if the match ended.
    pub(super) winner: Option<Player>,
    /// Why the match ended.
    pub(super) win_reason: Option<&'a str>,
    /// Round counter at the end of the script.
    pub(super) turn_number: u32,
    /// Every scripted action, accepted or not.
    pub(super) steps: &'a [Step],
    /// Final state, both boats included.
    pub(super) final_state: &'a GameState,
}

impl<'a> JsonGameResult<'a> {
    /// Collect the result of a scripted match.
    pub(super) fn new(
        seed: u64,
        config: GameConfig,
        state: &'a GameState,
        steps: &'a [Step],
    ) -> Self {
        Self {
            seed,
            config,
            is_game_over: state.is_game_over,
            winner: state.winner,
            win_reason: state.win_reason.as_deref(),
            turn_number: state.turn_number,
            steps,
            final_state: state,
        }
    }
}

/// Format one step as a line of text.
pub(super) fn format_step(step: &Step) -> String {
    let marker = if step.result.success() { "" } else { " [rejected]" };
    format!(
        "[turn {}] {} {}: {}{marker}\n",
        step.turn_number,
        step.player,
        step.command,
        step.result.message()
    )
}

/// Format the final outcome of a match as human-readable text.
pub(super) fn format_outcome(seed: u64, state: &GameState) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result (seed: {seed})\n"));
    match state.winner {
        Some(winner) => {
            output.push_str(&format!("  Winner: {winner}\n"));
            if let Some(reason) = &state.win_reason {
                output.push_str(&format!("  Reason: {reason}\n"));
            }
        }
        None => output.push_str(&format!("  In progress: {} to move\n", state.current_turn)),
    }
    output.push_str(&format!("  Turns: {}\n\n", state.turn_number));

    for player in Player::BOTH {
        let own = state.player(player);
        output.push_str(&format!(
            "  {player}: {} shots, {} hits landed, {}/{} damage taken\n",
            own.shot_count(),
            own.hits_landed(),
            own.boat.hit_count(),
            BOAT_LENGTH
        ));
    }

    output
}

/// Format the action history, one line per action.
pub(super) fn format_history(history: &[ActionRecord]) -> String {
    if history.is_empty() {
        return "No actions yet.\n".to_string();
    }

    let mut output = String::new();
    for (i, record) in history.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. [turn {}] {}: {}\n",
            i + 1,
            record.turn_number,
            record.player,
            record.message
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside::{Boat, Engine, Orientation, Position};

    fn fixture() -> Engine {
        let state = GameState::from_boats(
            10,
            Boat::new(Position::new(0, 0), Orientation::Horizontal),
            Boat::new(Position::new(5, 5), Orientation::Vertical),
        )
        .unwrap();
        Engine::from_state(state, 3).unwrap()
    }

    #[test]
    fn test_format_rejected_step() {
        let mut engine = fixture();
        let step = Step {
            line: 1,
            turn_number: 1,
            player: Player::Player2,
            command: "fire 1 1".to_string(),
            result: StepResult::Fire(engine.fire(Player::Player2, Position::new(1, 1))),
        };
        let text = format_step(&step);
        assert!(text.starts_with("[turn 1] player2 fire 1 1: It is not player2's turn"));
        assert!(text.ends_with(" [rejected]\n"));
    }

    #[test]
    fn test_format_outcome_in_progress() {
        let mut engine = fixture();
        engine.fire(Player::Player1, Position::new(5, 5));
        let text = format_outcome(3, &engine.state());
        assert!(text.contains("In progress: player2 to move"));
        assert!(text.contains("player1: 1 shots, 1 hits landed, 0/3 damage taken"));
        assert!(text.contains("player2: 0 shots, 0 hits landed, 1/3 damage taken"));
    }

    #[test]
    fn test_format_history() {
        let mut engine = fixture();
        assert_eq!(format_history(engine.history()), "No actions yet.\n");
        engine.fire(Player::Player1, Position::new(9, 9));
        assert_eq!(
            format_history(engine.history()),
            "  1. [turn 1] player1: Miss at (9, 9).\n"
        );
    }

    #[test]
    fn test_json_result_shape() {
        let mut engine = fixture();
        let result = engine.fire(Player::Player1, Position::new(6, 5));
        let steps = vec![Step {
            line: 2,
            turn_number: 1,
            player: Player::Player1,
            command: "fire 6 5".to_string(),
            result: StepResult::Fire(result),
        }];
        let state = engine.state();
        let result = JsonGameResult::new(3, *engine.config(), &state, &steps);
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["seed"], 3);
        assert_eq!(json["config"]["grid_size"], 10);
        assert_eq!(json["is_game_over"], false);
        assert_eq!(json["steps"][0]["result"]["hit"], true);
        assert_eq!(json["steps"][0]["player"], "player1");
        assert_eq!(json["final_state"]["current_turn"], "player2");
    }
}
