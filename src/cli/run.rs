//! Run command implementation.

use super::command::{Command, CommandLine};
use super::output::{format_history, format_outcome, format_step, JsonGameResult, Step, StepResult};
use super::{create_engine, CliError, OutputFormat};
use broadside::render::render_spectator;
use broadside::Engine;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the script cannot be read or contains a line that is
/// not a command.
pub(crate) fn execute(
    script: &Path,
    seed: Option<u64>,
    config: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let text = read_script(script)?;
    let mut engine = create_engine(seed, config)?;

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            if !quiet {
                writeln!(stdout, "Running script with seed {}...\n", engine.seed())?;
            }
            let steps = if quiet {
                apply_script(&mut engine, &text, &mut io::sink())?
            } else {
                apply_script(&mut engine, &text, &mut stdout)?
            };
            debug!(steps = steps.len(), "script applied");

            if !quiet {
                writeln!(stdout)?;
            }
            let state = engine.state();
            write!(stdout, "{}", format_outcome(engine.seed(), &state))?;
            writeln!(stdout)?;
            write!(stdout, "{}", render_spectator(&state))?;
        }
        OutputFormat::Json => {
            let steps = apply_script(&mut engine, &text, &mut io::sink())?;
            let state = engine.state();
            let json = serde_json::to_string_pretty(&JsonGameResult::new(
                engine.seed(),
                *engine.config(),
                &state,
                &steps,
            ))?;
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))
}

/// Apply every command in `script` to `engine`.
///
/// Blank lines and `#` comments are skipped. A line without a player
/// prefix acts for whoever holds the turn. Actions after the game ends
/// are ignored. Step lines and `view`/`board`/`history` output go to `out`.
///
/// # Errors
///
/// Returns an error naming the line if a line cannot be parsed, or if
/// writing to `out` fails.
fn apply_script<W: Write + ?Sized>(
    engine: &mut Engine,
    script: &str,
    out: &mut W,
) -> Result<Vec<Step>, CliError> {
    let mut steps = Vec::new();

    for (idx, raw) in script.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let parsed: CommandLine = text
            .parse()
            .map_err(|e| CliError::new(format!("line {line}: {e}")))?;
        let player = parsed.actor.unwrap_or_else(|| engine.current_turn());
        let turn_number = engine.state().turn_number;

        let result = match parsed.command {
            Command::Fire(target) => StepResult::Fire(engine.fire(player, target)),
            Command::Move { direction, spaces } => {
                StepResult::Move(engine.move_boat(player, direction, spaces))
            }
            Command::View => {
                write!(out, "{}", engine.visualize(player))?;
                continue;
            }
            Command::Board => {
                write!(out, "{}", render_spectator(&engine.state()))?;
                continue;
            }
            Command::History => {
                write!(out, "{}", format_history(engine.history()))?;
                continue;
            }
            Command::Quit => break,
        };

        let step = Step {
            line,
            turn_number,
            player,
            command: text.to_string(),
            result,
        };
        write!(out, "{}", format_step(&step))?;
        steps.push(step);

        if engine.is_game_over() {
            debug!(line, "game over, ignoring rest of script");
            break;
        }
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside::{Boat, GameState, Orientation, Player, Position};

    fn fixture() -> Engine {
        let state = GameState::from_boats(
            10,
            Boat::new(Position::new(0, 0), Orientation::Horizontal),
            Boat::new(Position::new(5, 5), Orientation::Vertical),
        )
        .unwrap();
        Engine::from_state(state, 11).unwrap()
    }

    #[test]
    fn test_script_plays_to_sink() {
        let script = "\
# player1 hunts the vertical boat at (5,5)
fire 5 5
fire 9 9
fire 6 5
fire 9 8   # player2 keeps missing
fire 7 5
fire 0 0   # never applied
";
        let mut engine = fixture();
        let mut out = Vec::new();
        let steps = apply_script(&mut engine, script, &mut out).unwrap();

        assert_eq!(steps.len(), 5);
        assert!(engine.is_game_over());
        assert_eq!(engine.state().winner, Some(Player::Player1));
        assert_eq!(steps[4].line, 6);
        assert_eq!(steps[4].command, "fire 7 5");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("[turn 3] player1 fire 7 5: Hit at (7, 5)! The enemy boat is sunk."));
    }

    #[test]
    fn test_script_records_rejections() {
        let mut engine = fixture();
        let steps = apply_script(&mut engine, "p2 fire 1 1\nmove down 1", &mut io::sink()).unwrap();

        assert_eq!(steps.len(), 2);
        assert!(!steps[0].result.success());
        assert_eq!(steps[0].player, Player::Player2);
        assert!(steps[1].result.success());
        assert_eq!(steps[1].player, Player::Player1);
        assert_eq!(engine.current_turn(), Player::Player2);
    }

    #[test]
    fn test_script_parse_error_names_line() {
        let mut engine = fixture();
        let err = apply_script(&mut engine, "fire 1 1\n\nfire x 1", &mut io::sink()).unwrap_err();
        assert_eq!(err.to_string(), "line 3: 'x' is not a number");
    }

    #[test]
    fn test_script_view_and_quit() {
        let mut engine = fixture();
        let mut out = Vec::new();
        let steps = apply_script(&mut engine, "view\nquit\nfire 1 1", &mut out).unwrap();

        assert!(steps.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Legend: B=your boat"));
        assert_eq!(engine.state().player(Player::Player1).shot_count(), 0);
    }
}
