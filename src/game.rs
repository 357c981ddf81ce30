//! Game layer for Broadside.
//!
//! Implements the rules of the one-boat Battleship variant:
//! - Grid geometry and boat cell expansion
//! - Random spawn with a separation retry
//! - Fire and move actions with turn order, hits, sinking and collisions
//! - Per-player views that hide the opposing boat

mod boat;
mod grid;
mod invariants;
mod outcome;
mod player;
mod spawn;
mod state;
mod view;

pub use boat::{min_distance, Boat, BoatCells, BOAT_LENGTH};
pub use grid::{Direction, Orientation, Position};
pub use invariants::{check_invariants, InvariantViolation};
pub use outcome::{FireResult, MoveResult, Rejection};
pub use player::{Player, PlayerState, ShotRecord, ShotResult};
pub use spawn::{place_boats, random_boat, Placement};
pub use state::GameState;
pub use view::{OwnBoatView, PlayerView};
