//! Horizontal bar widget for relative values.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// A horizontal bar filled to a ratio of its width.
pub struct ValueBar {
    /// Value to display (0.0 - 1.0).
    ratio: f64,
    filled_style: Style,
    empty_style: Style,
}

impl ValueBar {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 },
            filled_style: Style::default(),
            empty_style: Style::default(),
        }
    }

    pub fn filled_style(mut self, style: Style) -> Self {
        self.filled_style = style;
        self
    }

    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }
}

impl Widget for ValueBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled_width = (area.width as f64 * self.ratio).round() as u16;

        for x in 0..area.width {
            let (symbol, style) = if x < filled_width {
                ('█', self.filled_style)
            } else {
                ('░', self.empty_style)
            };
            buf[(area.x + x, area.y)].set_char(symbol).set_style(style);
        }
    }
}
