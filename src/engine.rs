//! The match engine: one game, its configuration, and its history.
//!
//! [`Engine`] is the surface an orchestrator talks to. It owns a single
//! [`GameState`] and hands out copies and projections of it, never
//! references into it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{error, info};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::{
    check_invariants, place_boats, Direction, FireResult, GameState, MoveResult, Player,
    PlayerView, Position,
};
use crate::render;

/// An action a player took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Shot at a cell.
    Fire {
        /// Target cell.
        target: Position,
    },
    /// Boat moved.
    Move {
        /// Direction moved.
        direction: Direction,
        /// Cells moved.
        spaces: u8,
    },
}

/// A successful action and what it caused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    /// Round the action was taken in.
    pub turn_number: u32,
    /// Acting player.
    pub player: Player,
    /// What they did.
    pub action: Action,
    /// Shot struck the opposing boat.
    pub hit: bool,
    /// Shot sank the opposing boat.
    pub sunk: bool,
    /// Move rammed the opposing boat.
    pub collision: bool,
    /// Result message returned to the player.
    pub message: String,
}

/// Owns one match.
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    seed: u64,
    rng: StdRng,
    state: GameState,
    history: Vec<ActionRecord>,
}

impl Engine {
    /// Start a match with a random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Start a match whose boat placement is fully determined by `seed`.
    ///
    /// Later [`reset`](Self::reset)s keep drawing from the same stream, so
    /// the whole sequence of matches is reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let state = new_game(&mut rng, &config);
        info!(seed, grid_size = config.grid_size, "new game");

        Ok(Self {
            config,
            seed,
            rng,
            state,
            history: Vec::new(),
        })
    }

    /// Take over an existing state, e.g. a fixture with known boat positions.
    ///
    /// The configuration takes its grid size from `state`; `seed` drives
    /// later resets.
    ///
    /// # Errors
    ///
    /// Returns an error if the state's grid size is not a valid config.
    pub fn from_state(state: GameState, seed: u64) -> Result<Self, ConfigError> {
        let config = GameConfig {
            grid_size: state.grid_size,
            ..GameConfig::default()
        };
        config.validate()?;

        Ok(Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            state,
            history: Vec::new(),
        })
    }

    /// Replace the match with a freshly placed one.
    pub fn reset(&mut self) -> GameState {
        self.state = new_game(&mut self.rng, &self.config);
        self.history.clear();
        info!(grid_size = self.config.grid_size, "game reset");
        self.state.clone()
    }

    /// Fire at `target` on behalf of `player`.
    pub fn fire(&mut self, player: Player, target: Position) -> FireResult {
        let turn_number = self.state.turn_number;
        let result = self.state.fire(player, target);
        if result.success {
            self.record(ActionRecord {
                turn_number,
                player,
                action: Action::Fire { target },
                hit: result.hit,
                sunk: result.sunk,
                collision: false,
                message: result.message.clone(),
            });
        }
        result
    }

    /// Move `player`'s boat `spaces` cells in `direction`.
    pub fn move_boat(&mut self, player: Player, direction: Direction, spaces: u8) -> MoveResult {
        let turn_number = self.state.turn_number;
        let result = self.state.move_boat(player, direction, spaces);
        if result.success {
            self.record(ActionRecord {
                turn_number,
                player,
                action: Action::Move { direction, spaces },
                hit: false,
                sunk: false,
                collision: result.collision,
                message: result.message.clone(),
            });
        }
        result
    }

    /// Full state including both boats. For spectators and tests only.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// What `player` is allowed to see.
    #[must_use]
    pub fn player_view(&self, player: Player) -> PlayerView {
        PlayerView::project(&self.state, player)
    }

    /// Text grid of `player`'s view.
    #[must_use]
    pub fn visualize(&self, player: Player) -> String {
        render::render_view(&self.player_view(player))
    }

    /// Plain-text status summary of `player`'s view.
    #[must_use]
    pub fn briefing(&self, player: Player) -> String {
        render::render_briefing(&self.player_view(player))
    }

    /// Successful actions since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the engine was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Check if the current match has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    /// Player to act next.
    #[must_use]
    pub const fn current_turn(&self) -> Player {
        self.state.current_turn
    }

    fn record(&mut self, record: ActionRecord) {
        self.history.push(record);
        if cfg!(debug_assertions) {
            for violation in check_invariants(&self.state) {
                error!(%violation, "invariant check failed");
            }
        }
    }
}

fn new_game(rng: &mut StdRng, config: &GameConfig) -> GameState {
    let placement = place_boats(rng, config);
    GameState::start(config.grid_size, placement.first, placement.second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Boat, Orientation};

    fn fixture() -> Engine {
        let state = GameState::from_boats(
            10,
            Boat::new(Position::new(0, 0), Orientation::Horizontal),
            Boat::new(Position::new(5, 5), Orientation::Vertical),
        )
        .unwrap();
        Engine::from_state(state, 1).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            grid_size: 1,
            ..GameConfig::default()
        };
        assert!(Engine::with_seed(config, 0).is_err());
    }

    #[test]
    fn test_seeded_engines_match() {
        let a = Engine::with_seed(GameConfig::default(), 1234).unwrap();
        let b = Engine::with_seed(GameConfig::default(), 1234).unwrap();
        assert_eq!(a.state(), b.state());
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_state_is_a_copy() {
        let engine = fixture();
        let mut copy = engine.state();
        copy.is_game_over = true;
        copy.players[1].boat.relocate(Position::new(0, 0));
        assert!(!engine.is_game_over());
        assert_eq!(
            engine.state().player(Player::Player2).boat.anchor,
            Position::new(5, 5)
        );
    }

    #[test]
    fn test_history_records_successes_only() {
        let mut engine = fixture();
        engine.fire(Player::Player2, Position::new(1, 1));
        engine.fire(Player::Player1, Position::new(5, 5));
        engine.move_boat(Player::Player2, Direction::Left, 3);
        engine.move_boat(Player::Player2, Direction::Left, 1);

        let history = engine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[0].action,
            Action::Fire {
                target: Position::new(5, 5)
            }
        );
        assert!(history[0].hit);
        assert_eq!(history[1].player, Player::Player2);
        assert_eq!(
            history[1].action,
            Action::Move {
                direction: Direction::Left,
                spaces: 1
            }
        );
        assert_eq!(history[1].turn_number, 1);
    }

    #[test]
    fn test_reset_replaces_game() {
        let mut engine = Engine::with_seed(GameConfig::default(), 5).unwrap();
        let first = engine.state();
        engine.fire(Player::Player1, Position::new(0, 0));

        let fresh = engine.reset();
        assert_eq!(fresh, engine.state());
        assert!(engine.history().is_empty());
        assert_eq!(fresh.turn_number, 1);
        assert_eq!(fresh.current_turn, Player::Player1);
        assert_eq!(fresh.player(Player::Player1).shot_count(), 0);
        assert_eq!(first.player(Player::Player1).shot_count(), 0);
    }

    #[test]
    fn test_visualize_does_not_mutate() {
        let mut engine = fixture();
        engine.fire(Player::Player1, Position::new(9, 9));
        let before = engine.state();
        let _ = engine.visualize(Player::Player1);
        let _ = engine.briefing(Player::Player2);
        assert_eq!(engine.state(), before);
    }
}
