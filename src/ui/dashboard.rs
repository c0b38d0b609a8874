//! Dashboard screen rendering
//!
//! Renders the main dashboard: search bar, current conditions, today and
//! tomorrow detail cards, the hour-part strip, the multi-day forecast with
//! a temperature sparkline, derived insights, and the news panel.

use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::conditions::{background_theme, classify};
use crate::data::WeatherSnapshot;
use crate::hourly::local_hour_index;
use crate::ui::news_panel;
use crate::ui::theme_colors;
use crate::ui::widgets::TempSparkline;

/// Hourly indices for the day-part strip (today's block)
const MORNING_HOUR: usize = 8;
const AFTERNOON_HOUR: usize = 14;
const EVENING_HOUR: usize = 20;

/// Renders the dashboard screen
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `app` - The application state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let category = app.snapshot.as_ref().map(|s| classify(s.weather_code()));
    let (border, accent) = theme_colors(background_theme(category));

    let title = match &app.snapshot {
        Some(snapshot) => format!(" Weather Dashboard — {} ", snapshot.place),
        None => " Weather Dashboard ".to_string(),
    };

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let error_height: u16 = if app.error.is_some() { 1 } else { 0 };
    let news_constraint = if app.show_news {
        Constraint::Min(0)
    } else {
        Constraint::Length(0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Search bar
            Constraint::Length(error_height), // Error banner
            Constraint::Length(13),           // Current + day cards
            Constraint::Length(3),            // Day-part strip
            Constraint::Length(7),            // Multi-day forecast
            Constraint::Length(4),            // Insights
            news_constraint,                  // News panel
            Constraint::Length(1),            // Footer
        ])
        .split(inner_area);

    render_search_bar(frame, chunks[0], app);

    if let Some(message) = &app.error {
        render_error_banner(frame, chunks[1], message);
    }

    match &app.snapshot {
        Some(snapshot) => {
            let cards = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(40),
                    Constraint::Percentage(30),
                    Constraint::Percentage(30),
                ])
                .split(chunks[2]);

            let hour_index = local_hour_index();
            render_current_card(frame, cards[0], app, snapshot, accent);
            super::day_cards::render_day_card(frame, cards[1], snapshot, 0, hour_index);
            super::day_cards::render_day_card(frame, cards[2], snapshot, 1, hour_index);

            render_hour_parts(frame, chunks[3], snapshot);
            render_week_strip(frame, chunks[4], snapshot);
            render_insights(frame, chunks[5], snapshot);
        }
        None => {
            let placeholder = Paragraph::new("No weather data loaded")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, chunks[2]);
        }
    }

    if app.show_news {
        news_panel::render(frame, chunks[6], &app.news);
    }

    render_footer(frame, chunks[7]);
}

/// Renders the search bar, with a live cursor while editing
fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (content, style) = match app.input_mode {
        InputMode::Search => (
            format!("{}▌", app.search_input),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Browse => (
            "Press / to search for a city".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(content).style(style).block(block), area);
}

/// Renders the error banner line
fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(format!("⚠ {}", message))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

/// Renders the current conditions card
fn render_current_card(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    snapshot: &WeatherSnapshot,
    accent: Color,
) {
    let block = Block::default()
        .title(" Now ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    match &snapshot.current {
        Some(current) => {
            let category = classify(Some(current.weathercode));
            lines.push(Line::from(Span::styled(
                format!("{:.1}°C", current.temperature),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "{} {}",
                category.icon(),
                category.label()
            )));
            lines.push(Line::from(format!("Wind: {:.1} km/h", current.windspeed)));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Current conditions unavailable",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    if let Some(refreshed) = app.last_refresh {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Updated {}", refreshed.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Renders the morning / afternoon / evening temperature strip
fn render_hour_parts(frame: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
    let parts = [
        ("Morning", MORNING_HOUR),
        ("Afternoon", AFTERNOON_HOUR),
        ("Evening", EVENING_HOUR),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let temps = snapshot
        .raw
        .hourly
        .as_ref()
        .and_then(|h| h.temperature_2m.as_ref());

    for (i, (label, hour)) in parts.iter().enumerate() {
        let value = temps
            .and_then(|t| t.get(*hour))
            .map(|t| format!("{:.0}°C", t))
            .unwrap_or_else(|| "--".to_string());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(format!("{} — {}", label, value))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, columns[i]);
    }
}

/// Formats a forecast date as a short weekday label (e.g. "Wed").
///
/// Falls back to the raw date string when it does not parse; this is the
/// only localized label in the app.
fn weekday_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Renders the multi-day forecast strip with a max-temperature sparkline
fn render_week_strip(frame: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
    let block = Block::default()
        .title(format!(" {}-Day Forecast ", snapshot.forecast.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if snapshot.forecast.is_empty() {
        let placeholder = Paragraph::new("No forecast available")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let maxes: Vec<f64> = snapshot.forecast.iter().map(|d| d.max).collect();
    frame.render_widget(TempSparkline::new(&maxes).highlight(0), rows[0]);

    let day_count = snapshot.forecast.len() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            snapshot
                .forecast
                .iter()
                .map(|_| Constraint::Ratio(1, day_count as u32))
                .collect::<Vec<_>>(),
        )
        .split(rows[1]);

    for (i, day) in snapshot.forecast.iter().enumerate() {
        let category = classify(Some(day.weather_code));
        let lines = vec![
            Line::from(Span::styled(
                weekday_label(&day.date),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(category.icon()),
            Line::from(format!("{:.0}°", day.max)),
            Line::from(Span::styled(
                format!("{:.0}°", day.min),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, columns[i]);
    }
}

/// Renders the derived insight statements
fn render_insights(frame: &mut Frame, area: Rect, snapshot: &WeatherSnapshot) {
    let block = Block::default()
        .title(" Weather Insights ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = if snapshot.insights.is_empty() {
        vec![Line::from(Span::styled(
            "No insights available",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        snapshot
            .insights
            .iter()
            .map(|insight| Line::from(format!("• {}", insight)))
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the footer key hints
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("/ search   r refresh   n news   ? help   q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
