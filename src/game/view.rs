//! Per-player projection of the game state.

use serde::Serialize;

use crate::game::{GameState, Orientation, Player, Position, ShotRecord};

/// What a player knows about their own boat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnBoatView {
    /// Anchor cell.
    pub anchor: Position,
    /// Axis the boat extends along.
    pub orientation: Orientation,
    /// Occupied cells, anchor first.
    pub cells: Vec<Position>,
    /// Distinct hits taken.
    pub hits_taken: usize,
    /// Occupied cells that have been struck.
    pub struck_cells: Vec<Position>,
}

/// The state visible to one player.
///
/// Contains no information about the opposing boat beyond what the
/// player's own shot history reveals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    /// Whose view this is.
    pub player: Player,
    /// The player's own boat.
    pub boat: OwnBoatView,
    /// Shots this player has fired, row-major.
    pub shots: Vec<ShotRecord>,
    /// Shots that struck the opposing boat.
    pub hits_landed: usize,
    /// Player to act next.
    pub current_turn: Player,
    /// Whether the match has ended.
    pub is_game_over: bool,
    /// Winner, once the match has ended.
    pub winner: Option<Player>,
    /// Why the match ended.
    pub win_reason: Option<String>,
    /// Round counter.
    pub turn_number: u32,
    /// Side length of the grid.
    pub grid_size: u8,
}

impl PlayerView {
    /// Project `state` for `player`.
    #[must_use]
    pub fn project(state: &GameState, player: Player) -> Self {
        let own = state.player(player);
        let boat = &own.boat;

        Self {
            player,
            boat: OwnBoatView {
                anchor: boat.anchor,
                orientation: boat.orientation,
                cells: boat.cells().to_vec(),
                hits_taken: boat.hit_count(),
                struck_cells: boat.struck_cells(),
            },
            shots: own.shots().collect(),
            hits_landed: own.hits_landed(),
            current_turn: state.current_turn,
            is_game_over: state.is_game_over,
            winner: state.winner,
            win_reason: state.win_reason.clone(),
            turn_number: state.turn_number,
            grid_size: state.grid_size,
        }
    }

    /// Check if it is this player's move.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        !self.is_game_over && self.current_turn == self.player
    }
}
