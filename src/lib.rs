// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Broadside: a rule engine for a two-player, one-boat Battleship variant.
//!
//! Each player owns a single three-cell boat on a shared square grid. On
//! their turn a player either fires at a cell or moves their boat one or
//! two cells. Three distinct hits sink a boat; ramming the enemy boat
//! loses the game.
//!
//! The engine is built for orchestrators such as agent harnesses:
//! - Every action returns a structured result, never a panic
//! - Players only ever see their own projection of the state
//! - Seeded boat placement makes every match reproducible
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Engine (config, seed, history)    │
//! ├─────────────────────────────────────┤
//! │  Game rules (state, spawn, views)   │
//! ├─────────────────────────────────────┤
//! │  Rendering (grids, text briefings)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use broadside::{Engine, GameConfig, Player, Position};
//!
//! let mut engine = Engine::with_seed(GameConfig::default(), 7).unwrap();
//! let result = engine.fire(Player::Player1, Position::new(4, 4));
//! assert!(result.success);
//! assert_eq!(engine.current_turn(), Player::Player2);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod render;

pub use config::GameConfig;
pub use engine::{Action, ActionRecord, Engine};
pub use error::{ConfigError, ParseError, SetupError};

// Re-export key game types at crate root for convenience
pub use game::{
    Boat, Direction, FireResult, GameState, MoveResult, Orientation, Player, PlayerView, Position,
    Rejection,
};
