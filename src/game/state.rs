//! Game state and the rules that mutate it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SetupError;
use crate::game::{
    Boat, Direction, FireResult, MoveResult, Player, PlayerState, Position, Rejection, ShotResult,
    BOAT_LENGTH,
};

/// Complete state of one match.
///
/// Holds both boats, so it must only reach omniscient callers (tests, a
/// spectator display). Player-facing callers get a
/// [`PlayerView`](crate::game::PlayerView) instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Side length of the square grid.
    pub grid_size: u8,
    /// Per-player state, indexed by [`Player::index`].
    pub players: [PlayerState; 2],
    /// Player to act next.
    pub current_turn: Player,
    /// Whether the match has ended.
    pub is_game_over: bool,
    /// Winner, once the match has ended.
    pub winner: Option<Player>,
    /// Why the match ended.
    pub win_reason: Option<String>,
    /// Round counter, starting at 1 and advancing whenever the first player
    /// regains the turn.
    pub turn_number: u32,
}

impl GameState {
    /// Start a match with the given boats.
    ///
    /// # Errors
    ///
    /// Returns an error if a boat leaves the grid or the boats overlap.
    pub fn from_boats(grid_size: u8, first: Boat, second: Boat) -> Result<Self, SetupError> {
        for (player, boat) in [(Player::Player1, &first), (Player::Player2, &second)] {
            if let Some(&cell) = boat.cells().iter().find(|c| !c.in_bounds(grid_size)) {
                return Err(SetupError::BoatOutOfBounds { player, cell });
            }
        }
        let second_cells = second.cells();
        if let Some(&cell) = first.cells().iter().find(|c| second_cells.contains(c)) {
            return Err(SetupError::BoatsOverlap { cell });
        }

        Ok(Self::start(grid_size, first, second))
    }

    /// Start a match from boats already known to fit and not overlap.
    pub(crate) fn start(grid_size: u8, first: Boat, second: Boat) -> Self {
        Self {
            grid_size,
            players: [PlayerState::new(first), PlayerState::new(second)],
            current_turn: Player::FIRST,
            is_game_over: false,
            winner: None,
            win_reason: None,
            turn_number: 1,
        }
    }

    /// State for one player.
    #[must_use]
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    fn player_mut(&mut self, player: Player) -> &mut PlayerState {
        &mut self.players[player.index()]
    }

    /// Check that `player` may act now.
    fn check_can_act(&self, player: Player) -> Result<(), Rejection> {
        if self.is_game_over {
            return Err(Rejection::GameOver);
        }
        if player != self.current_turn {
            return Err(Rejection::NotYourTurn {
                actor: player,
                expected: self.current_turn,
            });
        }
        Ok(())
    }

    /// Fire at `target` on behalf of `player`.
    ///
    /// Refusals leave the state untouched. A shot that sinks the opposing
    /// boat ends the game and keeps the turn with the firer.
    pub fn fire(&mut self, player: Player, target: Position) -> FireResult {
        if let Err(rejection) = self.check_can_act(player) {
            return FireResult::rejected(rejection);
        }
        if !target.in_bounds(self.grid_size) {
            return FireResult::rejected(Rejection::TargetOutOfBounds {
                target,
                grid_size: self.grid_size,
            });
        }
        if self.player(player).has_fired_at(target) {
            return FireResult::rejected(Rejection::AlreadyFired { target });
        }

        let opponent = player.opponent();
        let struck = self.player(opponent).boat.cell_index(target);
        let result = if struck.is_some() {
            ShotResult::Hit
        } else {
            ShotResult::Miss
        };
        self.player_mut(player).record_shot(target, result);

        let Some(index) = struck else {
            debug!(%player, %target, "miss");
            self.switch_turn();
            return FireResult::miss(target);
        };

        let boat = &mut self.player_mut(opponent).boat;
        boat.strike(index);
        let hit_count = boat.hit_count();
        let sunk = boat.is_sunk();
        debug!(%player, %target, hit_count, "hit");

        if sunk {
            let result = FireResult::sunk(target, hit_count, player);
            self.finish(player, result.message.clone());
            return result;
        }

        self.switch_turn();
        FireResult::hit(target, hit_count, usize::from(BOAT_LENGTH))
    }

    /// Move `player`'s boat `spaces` cells in `direction`.
    ///
    /// A move onto the opposing boat is carried out and loses the game for
    /// the mover.
    pub fn move_boat(&mut self, player: Player, direction: Direction, spaces: u8) -> MoveResult {
        if let Err(rejection) = self.check_can_act(player) {
            return MoveResult::rejected(rejection);
        }
        if !(1..=2).contains(&spaces) {
            return MoveResult::rejected(Rejection::InvalidDistance { spaces });
        }

        let boat = &self.player(player).boat;
        let anchor = boat.anchor.offset(direction, i16::from(spaces));
        let candidate = Boat::cells_at(anchor, boat.orientation);
        if !candidate.iter().all(|cell| cell.in_bounds(self.grid_size)) {
            return MoveResult::rejected(Rejection::MoveOutOfBounds { direction, spaces });
        }

        let opponent = player.opponent();
        let collision = self.player(opponent).boat.overlaps(&candidate);
        self.player_mut(player).boat.relocate(anchor);

        if collision {
            let result = MoveResult::collided(player, anchor);
            self.finish(opponent, result.message.clone());
            return result;
        }

        debug!(%player, %direction, spaces, %anchor, "boat moved");
        self.switch_turn();
        MoveResult::moved(direction, spaces, anchor)
    }

    /// Hand the turn to the other player.
    fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
        if self.current_turn == Player::FIRST {
            self.turn_number += 1;
        }
    }

    /// End the match.
    fn finish(&mut self, winner: Player, reason: String) {
        info!(%winner, turn = self.turn_number, reason = %reason, "game over");
        self.is_game_over = true;
        self.winner = Some(winner);
        self.win_reason = Some(reason);
    }
}
