//! Grid coordinates and directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A cell on the grid.
///
/// Components are signed so that a candidate position produced by moving off
/// the edge can be represented and then rejected by [`Position::in_bounds`].
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, 0 at the top.
    pub row: i16,
    /// Column, 0 at the left.
    pub col: i16,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Check if the position lies on a `grid_size` × `grid_size` grid.
    #[must_use]
    pub const fn in_bounds(self, grid_size: u8) -> bool {
        let size = grid_size as i16;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u16 {
        self.row.abs_diff(other.row).saturating_add(self.col.abs_diff(other.col))
    }

    /// Position `steps` cells away in `direction`.
    #[must_use]
    pub const fn offset(self, direction: Direction, steps: i16) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(
            self.row.saturating_add(dr * steps),
            self.col.saturating_add(dc * steps),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis a boat extends along from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Cells extend to the right (increasing column).
    Horizontal,
    /// Cells extend downward (increasing row).
    Vertical,
}

impl Orientation {
    /// Per-cell step from the anchor.
    #[must_use]
    pub const fn step(self) -> (i16, i16) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Direction a boat can be moved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Decreasing row.
    Up,
    /// Increasing row.
    Down,
    /// Decreasing column.
    Left,
    /// Increasing column.
    Right,
}

impl Direction {
    /// All directions, in display order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` change for a single step.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}
