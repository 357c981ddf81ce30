//! Random boat placement at the start of a match.

use rand::Rng;
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::game::{min_distance, Boat, Orientation, Position, BOAT_LENGTH};

/// Result of placing both boats.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Player 1's boat.
    pub first: Boat,
    /// Player 2's boat.
    pub second: Boat,
    /// How many times player 2's boat was drawn.
    pub attempts: u32,
    /// Whether the boats ended up at least `min_spawn_distance` apart.
    pub separated: bool,
}

/// Place a boat uniformly over orientations and in-grid anchors.
pub fn random_boat<R: Rng + ?Sized>(rng: &mut R, grid_size: u8) -> Boat {
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    // The long axis has `grid_size - BOAT_LENGTH + 1` valid anchors.
    let span = i16::from(grid_size);
    let long = span - i16::from(BOAT_LENGTH) + 1;
    let (rows, cols) = match orientation {
        Orientation::Horizontal => (span, long),
        Orientation::Vertical => (long, span),
    };

    let anchor = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
    Boat::new(anchor, orientation)
}

/// Place both boats, re-rolling the second until the pair is far enough
/// apart or the attempt budget runs out.
///
/// After the budget is spent the last draw is kept even if it is too close.
/// Overlapping boats are never returned: a draw that shares a cell with the
/// first boat is always re-rolled.
pub fn place_boats<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Placement {
    let grid_size = config.grid_size;
    let first = random_boat(rng, grid_size);
    let first_cells = first.cells();
    let min_spawn = u16::from(config.min_spawn_distance);

    let mut attempts = 0u32;
    loop {
        let second = random_boat(rng, grid_size);
        attempts = attempts.saturating_add(1);

        let distance = min_distance(&first_cells, &second.cells());
        if distance > 0 && distance >= min_spawn {
            debug!(attempts, distance, "boats placed");
            return Placement {
                first,
                second,
                attempts,
                separated: true,
            };
        }

        if attempts >= config.max_spawn_attempts && distance > 0 {
            warn!(
                attempts,
                distance,
                min = min_spawn,
                "spawn separation not reached, keeping last placement"
            );
            return Placement {
                first,
                second,
                attempts,
                separated: false,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_random_boat_fits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_boat(&mut rng, 10).fits(10));
            assert!(random_boat(&mut rng, 3).fits(3));
        }
    }

    #[test]
    fn test_random_boat_covers_both_orientations() {
        let mut rng = StdRng::seed_from_u64(11);
        let boats: Vec<_> = (0..200).map(|_| random_boat(&mut rng, 10)).collect();
        assert!(boats.iter().any(|b| b.orientation == Orientation::Horizontal));
        assert!(boats.iter().any(|b| b.orientation == Orientation::Vertical));
    }

    #[test]
    fn test_place_boats_separated() {
        let config = GameConfig::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placement = place_boats(&mut rng, &config);
            assert!(placement.separated, "seed {seed}");
            assert!(
                min_distance(&placement.first.cells(), &placement.second.cells()) >= 4,
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_place_boats_deterministic() {
        let config = GameConfig::default();
        let a = place_boats(&mut StdRng::seed_from_u64(99), &config);
        let b = place_boats(&mut StdRng::seed_from_u64(99), &config);
        assert_eq!(a.first, b.first);
        assert_eq!(a.second, b.second);
        assert_eq!(a.attempts, b.attempts);
    }

    #[test]
    fn test_exhausted_budget_keeps_last_without_overlap() {
        // A 3x3 grid can never give a distance of 4.
        let config = GameConfig {
            grid_size: 3,
            min_spawn_distance: 4,
            max_spawn_attempts: 5,
        };
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placement = place_boats(&mut rng, &config);
            assert!(!placement.separated);
            assert!(placement.attempts >= 5);
            assert!(!placement.first.overlaps(&placement.second.cells()));
        }
    }

    #[test]
    fn test_zero_separation_still_avoids_overlap() {
        let config = GameConfig {
            grid_size: 4,
            min_spawn_distance: 0,
            max_spawn_attempts: 1,
        };
        for seed in 0..200 {
            let placement = place_boats(&mut StdRng::seed_from_u64(seed), &config);
            assert!(placement.separated);
            assert!(!placement.first.overlaps(&placement.second.cells()));
        }
    }
}
