//! Button column widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use courselens_state::ButtonColumn;

use crate::theme::Theme;

/// A column of plugin buttons with a cursor.
pub struct ButtonList<'a> {
    column: &'a ButtonColumn,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ButtonList<'a> {
    pub fn new(column: &'a ButtonColumn, theme: &'a Theme) -> Self {
        Self {
            column,
            cursor: 0,
            focused: false,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ButtonList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(format!(" {} ", self.column.heading))
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(placeholder) = self.column.placeholder() {
            Paragraph::new(Span::styled(placeholder, Style::new().fg(self.theme.muted)))
                .render(inner, buf);
            return;
        }

        // Keep the cursor in view.
        let height = inner.height as usize;
        let offset = if height == 0 {
            0
        } else {
            self.cursor.saturating_sub(height - 1)
        };

        for (row, (index, button)) in self
            .column
            .buttons
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let number = if index < 9 {
                format!("{} ", index + 1)
            } else {
                "  ".to_string()
            };
            let mut style = if button.enabled {
                self.theme.button
            } else {
                self.theme.button_disabled
            };
            if self.focused && index == self.cursor {
                style = style.patch(self.theme.selected);
            }

            let line = Line::from(vec![
                Span::styled(number, self.theme.help_key),
                Span::styled(button.label.clone(), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
