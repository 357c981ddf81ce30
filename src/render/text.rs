//! Structured text output for LLM consumption.
//!
//! This format is optimized for machine readability while remaining
//! human-parseable. It gives an agent playing one side everything its
//! player view holds, plus a reminder of the legal actions.

#![allow(clippy::format_push_string)]

use crate::game::{PlayerView, Position, ShotResult, BOAT_LENGTH};
use crate::render::render_view;

/// Render a player view as a briefing for the agent playing that side.
///
/// Output format:
/// ```text
/// === TURN 4 ===
/// You are player1. It is your move.
///
/// YOUR BOAT:
/// - Cells: (0,0), (0,1), (0,2) (horizontal)
/// - Damage: 1/3 hits taken at (0,1)
///
/// YOUR SHOTS (3 fired, 1 hit):
/// - (2,4) hit
/// - (5,5) miss
/// - (9,9) miss
///
/// ACTIONS:
/// ...
/// ```
#[must_use]
pub fn render_briefing(view: &PlayerView) -> String {
    let mut output = String::new();

    render_header(&mut output, view);
    render_boat(&mut output, view);
    render_shots(&mut output, view);
    if view.is_my_turn() {
        render_actions(&mut output, view);
    }

    output.push_str("BOARD:\n");
    output.push_str(&render_view(view));

    output
}

/// Render the header and game status.
fn render_header(output: &mut String, view: &PlayerView) {
    output.push_str(&format!("=== TURN {} ===\n", view.turn_number));
    output.push_str(&format!("You are {}. ", view.player));

    if view.is_game_over {
        match view.winner {
            Some(winner) if winner == view.player => output.push_str("GAME OVER: you won."),
            Some(winner) => output.push_str(&format!("GAME OVER: {winner} won.")),
            None => output.push_str("GAME OVER."),
        }
        if let Some(reason) = &view.win_reason {
            output.push_str(&format!(" {reason}"));
        }
        output.push('\n');
    } else if view.is_my_turn() {
        output.push_str("It is your move.\n");
    } else {
        output.push_str(&format!("Waiting for {}.\n", view.current_turn));
    }

    let last = view.grid_size.saturating_sub(1);
    output.push_str(&format!(
        "Grid: {size}x{size}, rows and columns 0-{last}.\n\n",
        size = view.grid_size
    ));
}

/// Render the player's own boat.
fn render_boat(output: &mut String, view: &PlayerView) {
    let boat = &view.boat;
    output.push_str("YOUR BOAT:\n");
    output.push_str(&format!(
        "- Cells: {} ({})\n",
        join(&boat.cells),
        boat.orientation
    ));

    if boat.struck_cells.is_empty() {
        output.push_str(&format!("- Damage: 0/{BOAT_LENGTH} hits taken\n"));
    } else {
        output.push_str(&format!(
            "- Damage: {}/{BOAT_LENGTH} hits taken at {}\n",
            boat.hits_taken,
            join(&boat.struck_cells)
        ));
    }
    output.push('\n');
}

/// Render the player's shot history.
fn render_shots(output: &mut String, view: &PlayerView) {
    output.push_str(&format!(
        "YOUR SHOTS ({} fired, {} hit):\n",
        view.shots.len(),
        view.hits_landed
    ));
    if view.shots.is_empty() {
        output.push_str("- none yet\n");
    }
    for shot in &view.shots {
        let result = match shot.result {
            ShotResult::Hit => "hit",
            ShotResult::Miss => "miss",
        };
        output.push_str(&format!("- {} {result}\n", compact(shot.position)));
    }
    output.push('\n');
}

/// Remind the agent what it may do.
fn render_actions(output: &mut String, view: &PlayerView) {
    output.push_str("ACTIONS (choose one):\n");
    output.push_str("- fire <row> <col>: shoot at a cell you have not fired at before\n");
    output.push_str(
        "- move <up|down|left|right> <1|2>: shift your boat; it must stay on the grid, \
         and moving onto the enemy boat loses the game\n",
    );
    output.push_str(&format!(
        "Sinking the enemy boat takes {BOAT_LENGTH} hits on distinct cells; you have landed {}.\n\n",
        view.hits_landed
    ));
}

fn compact(position: Position) -> String {
    format!("({},{})", position.row, position.col)
}

fn join(cells: &[Position]) -> String {
    cells
        .iter()
        .map(|&cell| compact(cell))
        .collect::<Vec<_>>()
        .join(", ")
}
