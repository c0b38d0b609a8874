//! UI rendering module for skydeck
//!
//! Contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod dashboard;
pub mod day_cards;
pub mod help_overlay;
pub mod news_panel;
pub mod widgets;

pub use dashboard::render as render_dashboard;
pub use help_overlay::render as render_help_overlay;

use ratatui::style::Color;

use crate::conditions::BackgroundTheme;

/// Maps a background theme token to its (border, accent) color pair.
///
/// Warm tones for clear skies, grays for cloud, blues for rain, near-white
/// for snow, purple for storms. `Neutral` (no data yet) and `Hazy`
/// (unclassified code) are distinct tokens and get distinct pairs.
pub fn theme_colors(theme: BackgroundTheme) -> (Color, Color) {
    match theme {
        BackgroundTheme::Neutral => (Color::LightBlue, Color::Blue),
        BackgroundTheme::Sunny => (Color::Yellow, Color::LightRed),
        BackgroundTheme::Overcast => (Color::Gray, Color::DarkGray),
        BackgroundTheme::Rainy => (Color::Blue, Color::Cyan),
        BackgroundTheme::Snowy => (Color::White, Color::LightCyan),
        BackgroundTheme::Stormy => (Color::Magenta, Color::DarkGray),
        BackgroundTheme::Hazy => (Color::DarkGray, Color::LightBlue),
    }
}
