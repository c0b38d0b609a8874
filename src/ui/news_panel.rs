//! Weather news panel rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::NewsItem;

/// Renders the news panel listing recent weather headlines.
///
/// Shows a hint when no articles are loaded, either because no API key was
/// configured or because the fetch failed.
pub fn render(frame: &mut Frame, area: Rect, articles: &[NewsItem]) {
    let block = Block::default()
        .title(" Weather News ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines: Vec<Line> = if articles.is_empty() {
        vec![Line::from(Span::styled(
            "No news loaded — start with --news-key to enable headlines",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let mut lines = Vec::new();
        for article in articles {
            lines.push(Line::from(Span::styled(
                format!("• {}", article.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(description) = &article.description {
                lines.push(Line::from(Span::styled(
                    format!("  {}", description),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        lines
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
