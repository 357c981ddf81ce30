//! The single boat each player commands.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::{Orientation, Position};

/// Number of cells a boat occupies, and hits needed to sink it.
pub const BOAT_LENGTH: u8 = 3;

/// Cells of one boat, anchor first.
pub type BoatCells = [Position; BOAT_LENGTH as usize];

/// A boat on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    /// Lowest row/column cell; the rest extend from here.
    pub anchor: Position,
    /// Axis the boat extends along.
    pub orientation: Orientation,
    /// Indices (`0..BOAT_LENGTH`) of cells that have been struck.
    hits: BTreeSet<u8>,
}

impl Boat {
    /// Create an undamaged boat.
    #[must_use]
    pub fn new(anchor: Position, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
            hits: BTreeSet::new(),
        }
    }

    /// Cells a boat with this anchor and orientation would occupy.
    ///
    /// This is the only place boat geometry is derived from.
    #[must_use]
    pub fn cells_at(anchor: Position, orientation: Orientation) -> BoatCells {
        let (dr, dc) = orientation.step();
        std::array::from_fn(|i| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let i = i as i16;
            Position::new(anchor.row.saturating_add(dr * i), anchor.col.saturating_add(dc * i))
        })
    }

    /// Cells this boat currently occupies.
    #[must_use]
    pub fn cells(&self) -> BoatCells {
        Self::cells_at(self.anchor, self.orientation)
    }

    /// Index of `target` among this boat's cells, if it is one of them.
    #[must_use]
    pub fn cell_index(&self, target: Position) -> Option<u8> {
        self.cells()
            .iter()
            .position(|&cell| cell == target)
            .and_then(|idx| u8::try_from(idx).ok())
    }

    /// Check if every cell lies on the grid.
    #[must_use]
    pub fn fits(&self, grid_size: u8) -> bool {
        self.cells().iter().all(|cell| cell.in_bounds(grid_size))
    }

    /// Check if this boat shares any cell with `cells`.
    #[must_use]
    pub fn overlaps(&self, cells: &BoatCells) -> bool {
        self.cells().iter().any(|cell| cells.contains(cell))
    }

    /// Record a strike on the cell at `index`.
    ///
    /// Returns `false` if that cell was already struck or the index is out
    /// of range.
    pub fn strike(&mut self, index: u8) -> bool {
        index < BOAT_LENGTH && self.hits.insert(index)
    }

    /// Number of distinct cells struck.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    /// Struck cell indices, ascending.
    pub fn hit_indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.hits.iter().copied()
    }

    /// Struck cells at the boat's current position.
    #[must_use]
    pub fn struck_cells(&self) -> Vec<Position> {
        let cells = self.cells();
        self.hits
            .iter()
            .filter_map(|&idx| cells.get(usize::from(idx)).copied())
            .collect()
    }

    /// Check if every cell has been struck.
    #[must_use]
    pub fn is_sunk(&self) -> bool {
        self.hits.len() >= usize::from(BOAT_LENGTH)
    }

    /// Move the anchor, keeping damage attached to the same cell indices.
    pub fn relocate(&mut self, anchor: Position) {
        self.anchor = anchor;
    }
}

/// Smallest Manhattan distance between any cell of `a` and any cell of `b`.
#[must_use]
pub fn min_distance(a: &BoatCells, b: &BoatCells) -> u16 {
    a.iter()
        .flat_map(|&ca| b.iter().map(move |&cb| ca.manhattan(cb)))
        .min()
        .unwrap_or(0)
}
