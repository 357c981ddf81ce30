//! Text renderings of a match.
//!
//! All renderers take a read-only view or state and return a `String`;
//! none of them touch the engine.

mod grid;
mod text;

pub use grid::{render_spectator, render_view};
pub use text::render_briefing;
