//! Player identity and per-player state.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::game::{Boat, Position};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first.
    #[serde(rename = "player1")]
    Player1,
    /// Moves second.
    #[serde(rename = "player2")]
    Player2,
}

impl Player {
    /// The player who opens every round.
    pub const FIRST: Player = Player::Player1;

    /// Both players, in turn order.
    pub const BOTH: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Slot in per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => f.write_str("player1"),
            Player::Player2 => f.write_str("player2"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "player1" | "p1" | "1" => Ok(Player::Player1),
            "player2" | "p2" | "2" => Ok(Player::Player2),
            _ => Err(ParseError::Player(s.to_string())),
        }
    }
}

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotResult {
    /// The shot struck the opposing boat.
    Hit,
    /// The shot landed in open water.
    Miss,
}

/// A fired shot and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Target cell.
    pub position: Position,
    /// Whether it struck the opposing boat.
    pub result: ShotResult,
}

/// Everything one player owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The player's boat.
    pub boat: Boat,
    /// Shots this player has fired, one entry per target.
    #[serde(with = "shot_list")]
    shots: BTreeMap<Position, ShotResult>,
}

impl PlayerState {
    /// Create a player with the given boat and no shots fired.
    #[must_use]
    pub fn new(boat: Boat) -> Self {
        Self {
            boat,
            shots: BTreeMap::new(),
        }
    }

    /// Check if this player has already fired at `target`.
    #[must_use]
    pub fn has_fired_at(&self, target: Position) -> bool {
        self.shots.contains_key(&target)
    }

    /// Record a shot.
    ///
    /// Returns `false` and leaves the history untouched if `target` was
    /// already recorded.
    pub fn record_shot(&mut self, target: Position, result: ShotResult) -> bool {
        if self.shots.contains_key(&target) {
            return false;
        }
        self.shots.insert(target, result);
        true
    }

    /// Shot history in row-major order.
    pub fn shots(&self) -> impl Iterator<Item = ShotRecord> + '_ {
        self.shots
            .iter()
            .map(|(&position, &result)| ShotRecord { position, result })
    }

    /// Number of shots fired.
    #[must_use]
    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    /// Number of shots that hit.
    #[must_use]
    pub fn hits_landed(&self) -> usize {
        self.shots
            .values()
            .filter(|&&result| result == ShotResult::Hit)
            .count()
    }
}

/// JSON object keys must be strings, so the history travels as a list.
mod shot_list {
    use super::{BTreeMap, Deserialize, Deserializer, Position, Serializer, ShotRecord, ShotResult};

    pub(super) fn serialize<S: Serializer>(
        shots: &BTreeMap<Position, ShotResult>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            shots
                .iter()
                .map(|(&position, &result)| ShotRecord { position, result }),
        )
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Position, ShotResult>, D::Error> {
        let records = Vec::<ShotRecord>::deserialize(deserializer)?;
        Ok(records
            .into_iter()
            .map(|record| (record.position, record.result))
            .collect())
    }
}
