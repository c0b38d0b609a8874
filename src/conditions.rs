//! Weather code classification
//!
//! Maps WMO weather condition codes (as reported by the Open-Meteo API) to
//! a semantic category, and derives the display glyph and background theme
//! used throughout the UI.

use serde::{Deserialize, Serialize};

/// Semantic weather condition categories
///
/// A closed set keyed by WMO code ranges. Codes that fall outside every
/// known set (including a missing code) classify as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionCategory {
    Clear,
    PartlyCloudy,
    Rain,
    Snow,
    Storm,
    Unknown,
}

/// Background theme tokens for the dashboard
///
/// `Neutral` is the theme before any data has arrived; `Hazy` is the theme
/// for an unrecognized weather code. They are deliberately separate tokens:
/// "no data yet" and "data we can't classify" render differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundTheme {
    Neutral,
    Sunny,
    Overcast,
    Rainy,
    Snowy,
    Stormy,
    Hazy,
}

/// Classifies a WMO weather code into a condition category.
///
/// The code sets are the fixed vendor ranges and are disjoint, so order of
/// the match arms does not matter. Every input resolves to a category;
/// this function never fails.
///
/// # Example
///
/// ```
/// use skydeck::conditions::{classify, ConditionCategory};
///
/// assert_eq!(classify(Some(0)), ConditionCategory::Clear);
/// assert_eq!(classify(Some(63)), ConditionCategory::Rain);
/// assert_eq!(classify(None), ConditionCategory::Unknown);
/// ```
pub fn classify(code: Option<i32>) -> ConditionCategory {
    match code {
        Some(0) => ConditionCategory::Clear,
        Some(1..=3) => ConditionCategory::PartlyCloudy,
        Some(61 | 63 | 65 | 80 | 81 | 82) => ConditionCategory::Rain,
        Some(71 | 73 | 75 | 85 | 86) => ConditionCategory::Snow,
        Some(95 | 96 | 99) => ConditionCategory::Storm,
        _ => ConditionCategory::Unknown,
    }
}

impl ConditionCategory {
    /// Returns the display glyph for this category.
    ///
    /// `Unknown` gets the generic thermometer glyph.
    pub fn icon(self) -> &'static str {
        match self {
            ConditionCategory::Clear => "\u{2600}",        // ☀
            ConditionCategory::PartlyCloudy => "\u{26C5}", // ⛅
            ConditionCategory::Rain => "\u{1F327}",        // 🌧
            ConditionCategory::Snow => "\u{2744}",         // ❄
            ConditionCategory::Storm => "\u{26C8}",        // ⛈
            ConditionCategory::Unknown => "\u{1F321}",     // 🌡
        }
    }

    /// Returns a short human-readable label for this category.
    pub fn label(self) -> &'static str {
        match self {
            ConditionCategory::Clear => "Clear Sky",
            ConditionCategory::PartlyCloudy => "Partly Cloudy",
            ConditionCategory::Rain => "Rain",
            ConditionCategory::Snow => "Snow",
            ConditionCategory::Storm => "Thunderstorm",
            ConditionCategory::Unknown => "Unknown Weather",
        }
    }
}

/// Selects the background theme for a condition category.
///
/// `None` means no weather data has been loaded yet and yields `Neutral`,
/// which is a different token than `Unknown`'s `Hazy`.
pub fn background_theme(category: Option<ConditionCategory>) -> BackgroundTheme {
    match category {
        None => BackgroundTheme::Neutral,
        Some(ConditionCategory::Clear) => BackgroundTheme::Sunny,
        Some(ConditionCategory::PartlyCloudy) => BackgroundTheme::Overcast,
        Some(ConditionCategory::Rain) => BackgroundTheme::Rainy,
        Some(ConditionCategory::Snow) => BackgroundTheme::Snowy,
        Some(ConditionCategory::Storm) => BackgroundTheme::Stormy,
        Some(ConditionCategory::Unknown) => BackgroundTheme::Hazy,
    }
}
