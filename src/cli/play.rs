//! Play command implementation: a hot-seat match on the terminal.

use super::command::{Command, CommandError, CommandLine};
use super::output::{format_history, format_outcome};
use super::{create_engine, CliError};
use broadside::render::render_spectator;
use broadside::{Engine, Player};
use std::io::{self, BufRead, Write};
use std::path::Path;

const HELP: &str = "Commands: fire <row> <col> | move <up|down|left|right> <1|2> | view | history | quit";

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the config is invalid or the terminal cannot be
/// read or written.
pub(crate) fn execute(seed: Option<u64>, config: Option<&Path>) -> Result<(), CliError> {
    let mut engine = create_engine(seed, config)?;
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Broadside (seed {})", engine.seed())?;
    writeln!(stdout, "{HELP}")?;
    session(&mut engine, io::stdin().lock(), &mut stdout)
}

/// Drive a match from `input` until it ends, the input runs out, or the
/// players quit.
///
/// The acting player's view is shown whenever the turn passes, so each
/// player should look away while the other moves. Every command acts for
/// the player holding the turn and only ever shows that player's view; both
/// boats are revealed once the match is over.
fn session<R: BufRead, W: Write>(
    engine: &mut Engine,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut lines = input.lines();
    let mut shown: Option<(Player, u32)> = None;

    while !engine.is_game_over() {
        let player = engine.current_turn();
        let turn = engine.state().turn_number;
        if shown != Some((player, turn)) {
            write!(out, "\n=== {player}, turn {turn} ===\n{}", engine.visualize(player))?;
            shown = Some((player, turn));
        }
        write!(out, "{player}> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let parsed: CommandLine = match line?.parse() {
            Ok(parsed) => parsed,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(out, "{e}\n{HELP}")?;
                continue;
            }
        };
        if parsed.actor.is_some_and(|actor| actor != player) {
            writeln!(out, "It is {player}'s turn; commands act for the player to move.")?;
            continue;
        }

        match parsed.command {
            Command::Fire(target) => {
                writeln!(out, "{}", engine.fire(player, target).message)?;
            }
            Command::Move { direction, spaces } => {
                writeln!(out, "{}", engine.move_boat(player, direction, spaces).message)?;
            }
            Command::View => write!(out, "{}", engine.visualize(player))?,
            Command::Board => writeln!(out, "The full board is shown when the game ends.")?,
            Command::History => write!(out, "{}", format_history(engine.history()))?,
            Command::Quit => return Ok(()),
        }
    }

    let state = engine.state();
    writeln!(out)?;
    write!(out, "{}", format_outcome(engine.seed(), &state))?;
    writeln!(out)?;
    write!(out, "{}", render_spectator(&state))?;
    Ok(())
}
