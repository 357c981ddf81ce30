//! Error types for setting up games.
//!
//! Rule violations during play (wrong turn, repeat shot, ...) are not errors:
//! they come back as [`Rejection`](crate::game::Rejection) values inside a
//! result. The types here cover the fallible parts around a match: loading a
//! configuration, building a fixture state, and parsing command text.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::{Player, Position};

/// Invalid or unreadable game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Grid cannot hold a boat, or is too large to render.
    #[error("grid size {size} is out of range ({min}..={max})")]
    GridSize {
        /// Requested grid size.
        size: u8,
        /// Smallest accepted size.
        min: u8,
        /// Largest accepted size.
        max: u8,
    },

    /// Retry bound allows no placement, or too many re-rolls.
    #[error("max_spawn_attempts {attempts} is out of range (1..={max})")]
    SpawnAttempts {
        /// Requested attempt bound.
        attempts: u32,
        /// Largest accepted bound.
        max: u32,
    },

    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`GameConfig`](crate::GameConfig).
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Invalid explicit boat placement.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// One of the boat's cells lies outside the grid.
    #[error("{player} boat leaves the grid at {cell}")]
    BoatOutOfBounds {
        /// Owner of the offending boat.
        player: Player,
        /// First cell found outside the grid.
        cell: Position,
    },

    /// The two boats share a cell.
    #[error("boats overlap at {cell}")]
    BoatsOverlap {
        /// First shared cell.
        cell: Position,
    },
}

/// Unparseable command or argument text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown direction name.
    #[error("unknown direction '{0}' (expected up, down, left or right)")]
    Direction(String),

    /// Unknown player name.
    #[error("unknown player '{0}' (expected player1 or player2)")]
    Player(String),
}
