//! Show command implementation.

use super::{create_engine, CliError, ShowFormat};
use broadside::render::render_spectator;
use broadside::{Engine, Player};
use std::io::{self, Write};
use std::path::Path;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the config is invalid or output fails.
pub(crate) fn execute(
    seed: Option<u64>,
    config: Option<&Path>,
    player: Option<Player>,
    format: ShowFormat,
) -> Result<(), CliError> {
    let engine = create_engine(seed, config)?;
    let text = render(&engine, player, format)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Seed: {}\n", engine.seed())?;
    write!(stdout, "{text}")?;
    Ok(())
}

/// Render the engine's match for `player`, or for a spectator.
fn render(engine: &Engine, player: Option<Player>, format: ShowFormat) -> Result<String, CliError> {
    let text = match (format, player) {
        (ShowFormat::Text, Some(player)) => engine.visualize(player),
        (ShowFormat::Text, None) => render_spectator(&engine.state()),
        (ShowFormat::Json, Some(player)) => {
            serde_json::to_string_pretty(&engine.player_view(player))? + "\n"
        }
        (ShowFormat::Json, None) => serde_json::to_string_pretty(&engine.state())? + "\n",
        (ShowFormat::Briefing, Some(player)) => engine.briefing(player),
        (ShowFormat::Briefing, None) => Player::BOTH
            .iter()
            .map(|&player| engine.briefing(player))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside::GameConfig;

    fn engine() -> Engine {
        Engine::with_seed(GameConfig::default(), 99).unwrap()
    }

    #[test]
    fn test_player_json_hides_opponent() {
        let engine = engine();
        let json = render(&engine, Some(Player::Player1), ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["player"], "player1");
        assert!(value.get("players").is_none());
        assert_eq!(value["boat"]["cells"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_spectator_json_has_both_boats() {
        let engine = engine();
        let json = render(&engine, None, ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["players"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_briefing_for_both_players() {
        let engine = engine();
        let text = render(&engine, None, ShowFormat::Briefing).unwrap();
        assert!(text.contains("You are player1."));
        assert!(text.contains("You are player2."));
    }

    #[test]
    fn test_text_view() {
        let engine = engine();
        let text = render(&engine, Some(Player::Player2), ShowFormat::Text).unwrap();
        assert_eq!(text.matches('B').count(), 4);
    }
}
