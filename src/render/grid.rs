//! Character grids for a player view and for spectators.

#![allow(clippy::format_push_string)]

use crate::game::{GameState, Player, PlayerView, Position, ShotResult};

/// Open water.
const WATER: char = '.';
/// A cell of the viewer's own boat.
const OWN_BOAT: char = 'B';
/// A shot that struck the opposing boat.
const HIT: char = 'X';
/// A shot that landed in open water.
const MISS: char = 'O';
/// A struck boat cell, spectator view.
const STRUCK: char = '*';
/// Both boats on one cell, spectator view after a collision.
const OVERLAP: char = '#';

/// Render a player's view as a grid.
///
/// Output format (10x10, boat at (0,0) horizontal, one hit and one miss):
/// ```text
///     0 1 2 3 4 5 6 7 8 9
///  0  B B B . . . . . . .
///  1  . . . . X . . . . .
///  2  . . . . . . . O . .
///  ...
///
/// Legend: B=your boat  X=hit  O=miss  .=water
/// ```
///
/// Shot markers take precedence over boat markers on the same cell.
#[must_use]
pub fn render_view(view: &PlayerView) -> String {
    let mut cells = blank(view.grid_size);

    for &cell in &view.boat.cells {
        set(&mut cells, view.grid_size, cell, OWN_BOAT);
    }
    for shot in &view.shots {
        let marker = match shot.result {
            ShotResult::Hit => HIT,
            ShotResult::Miss => MISS,
        };
        set(&mut cells, view.grid_size, shot.position, marker);
    }

    let mut output = draw(&cells, view.grid_size);
    output.push_str("\nLegend: B=your boat  X=hit  O=miss  .=water\n");
    output
}

/// Render the full state with both boats, for an omniscient observer.
///
/// Boats are drawn as `1` and `2`, struck cells as `*`. Shots are not
/// drawn; each player's own view shows those.
#[must_use]
pub fn render_spectator(state: &GameState) -> String {
    let size = state.grid_size;
    let mut cells = blank(size);

    for player in Player::BOTH {
        let boat = &state.player(player).boat;
        let marker = match player {
            Player::Player1 => '1',
            Player::Player2 => '2',
        };
        for cell in boat.cells() {
            let current = get(&cells, size, cell);
            let next = if current == Some(WATER) { marker } else { OVERLAP };
            set(&mut cells, size, cell, next);
        }
    }
    for player in Player::BOTH {
        for cell in state.player(player).boat.struck_cells() {
            if get(&cells, size, cell) != Some(OVERLAP) {
                set(&mut cells, size, cell, STRUCK);
            }
        }
    }

    let mut output = draw(&cells, size);
    output.push_str("\nLegend: 1/2=boats  *=struck  #=collision  .=water\n");
    output
}

fn blank(size: u8) -> Vec<char> {
    vec![WATER; usize::from(size) * usize::from(size)]
}

fn index(size: u8, cell: Position) -> Option<usize> {
    if !cell.in_bounds(size) {
        return None;
    }
    let row = usize::try_from(cell.row).ok()?;
    let col = usize::try_from(cell.col).ok()?;
    Some(row * usize::from(size) + col)
}

fn get(cells: &[char], size: u8, cell: Position) -> Option<char> {
    index(size, cell).and_then(|idx| cells.get(idx).copied())
}

fn set(cells: &mut [char], size: u8, cell: Position, marker: char) {
    if let Some(slot) = index(size, cell).and_then(|idx| cells.get_mut(idx)) {
        *slot = marker;
    }
}

fn draw(cells: &[char], size: u8) -> String {
    let width = usize::from(size);
    // Two-digit column labels need a wider cell to stay separated.
    let cell = if size > 10 { 3 } else { 2 };
    let mut output = String::with_capacity((width * cell + 4) * (width + 1));

    output.push_str("   ");
    for col in 0..size {
        output.push_str(&format!("{col:>cell$}"));
    }
    output.push('\n');

    for (row, line) in cells.chunks(width).enumerate() {
        output.push_str(&format!("{row:>2} "));
        for &marker in line {
            output.push_str(&format!("{marker:>cell$}"));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Boat, Direction, Orientation};

    fn create_test_game() -> GameState {
        GameState::from_boats(
            10,
            Boat::new(Position::new(0, 0), Orientation::Horizontal),
            Boat::new(Position::new(1, 4), Orientation::Vertical),
        )
        .unwrap()
    }

    fn row(rendered: &str, row: usize) -> &str {
        rendered.lines().nth(row + 1).unwrap()
    }

    #[test]
    fn test_view_marks_own_boat() {
        let game = create_test_game();
        let rendered = render_view(&PlayerView::project(&game, Player::Player1));
        assert_eq!(row(&rendered, 0), " 0  B B B . . . . . . .");
        assert_eq!(row(&rendered, 1), " 1  . . . . . . . . . .");
        assert!(rendered.starts_with("    0 1 2 3 4 5 6 7 8 9\n"));
    }

    #[test]
    fn test_view_shots_override_boat() {
        let mut game = create_test_game();
        game.fire(Player::Player1, Position::new(2, 4));
        game.fire(Player::Player2, Position::new(0, 1));
        game.fire(Player::Player1, Position::new(9, 9));

        let p1 = render_view(&PlayerView::project(&game, Player::Player1));
        assert_eq!(row(&p1, 2), " 2  . . . . X . . . . .");
        assert_eq!(row(&p1, 9), " 9  . . . . . . . . . O");
        // Player 2's hit on player 1 is not a player 1 shot.
        assert_eq!(row(&p1, 0), " 0  B B B . . . . . . .");

        let p2 = render_view(&PlayerView::project(&game, Player::Player2));
        assert_eq!(row(&p2, 0), " 0  . X . . . . . . . .");
        assert_eq!(row(&p2, 1), " 1  . . . . B . . . . .");
    }

    #[test]
    fn test_view_never_shows_opponent() {
        let game = create_test_game();
        let rendered = render_view(&PlayerView::project(&game, Player::Player2));
        assert_eq!(row(&rendered, 0), " 0  . . . . . . . . . .");
    }

    #[test]
    fn test_spectator_shows_both() {
        let mut game = create_test_game();
        game.fire(Player::Player1, Position::new(3, 4));

        let rendered = render_spectator(&game);
        assert_eq!(row(&rendered, 0), " 0  1 1 1 . . . . . . .");
        assert_eq!(row(&rendered, 1), " 1  . . . . 2 . . . . .");
        assert_eq!(row(&rendered, 3), " 3  . . . . * . . . . .");
    }

    #[test]
    fn test_spectator_marks_collision() {
        let mut game = create_test_game();
        game.move_boat(Player::Player1, Direction::Down, 1);
        game.move_boat(Player::Player2, Direction::Left, 1);
        game.move_boat(Player::Player1, Direction::Right, 1);
        assert!(game.is_game_over);

        let rendered = render_spectator(&game);
        assert_eq!(row(&rendered, 1), " 1  . 1 1 # . . . . . .");
    }

    #[test]
    fn test_two_digit_columns() {
        let game = GameState::from_boats(
            12,
            Boat::new(Position::new(11, 9), Orientation::Horizontal),
            Boat::new(Position::new(0, 0), Orientation::Vertical),
        )
        .unwrap();
        let rendered = render_view(&PlayerView::project(&game, Player::Player1));
        assert!(rendered.starts_with("     0  1  2  3  4  5  6  7  8  9 10 11\n"));
        assert_eq!(row(&rendered, 11), "11    .  .  .  .  .  .  .  .  .  B  B  B");
        assert_eq!(row(&rendered, 0), " 0    .  .  .  .  .  .  .  .  .  .  .  .");
    }
}
