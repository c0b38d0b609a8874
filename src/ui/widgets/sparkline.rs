//! Temperature sparkline widget for inline visualization

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Block characters for different temperature levels (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A sparkline widget showing a temperature series over days
///
/// Values are normalized over the series' own min..max range, so the shape
/// survives negative temperatures and narrow spans alike.
pub struct TempSparkline<'a> {
    /// Temperatures for each day
    temps: &'a [f64],
    /// Lower bound of the normalization range
    min: f64,
    /// Upper bound of the normalization range
    max: f64,
    /// Highlighted position (index into temps)
    highlight: Option<usize>,
    /// Style for the sparkline
    style: Style,
    /// Style for the highlighted position
    highlight_style: Style,
}

impl<'a> TempSparkline<'a> {
    pub fn new(temps: &'a [f64]) -> Self {
        let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            temps,
            min,
            max,
            highlight: None,
            style: Style::default().fg(Color::Cyan),
            highlight_style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn highlight(mut self, pos: usize) -> Self {
        self.highlight = Some(pos);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn temp_to_block(&self, temp: f64) -> char {
        let range = self.max - self.min;
        if range <= f64::EPSILON {
            // Flat series: every day renders at mid height
            return BLOCKS[3];
        }
        let normalized = ((temp - self.min) / range).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }
}

impl<'a> Widget for TempSparkline<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;

        for (i, temp) in self.temps.iter().take(width).enumerate() {
            let block = self.temp_to_block(*temp);
            let x = area.x + i as u16;
            let y = area.y;

            let style = if self.highlight == Some(i) {
                self.highlight_style
            } else {
                self.style
            };

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(block).set_style(style);
            }
        }
    }
}
