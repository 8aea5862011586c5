//! Help overlay widget.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::event::HELP_SECTIONS;
use crate::theme::Theme;

/// Width of the key column.
const KEY_WIDTH: usize = 12;

/// Centered popup listing the key bindings.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(self.theme.info)
            .add_modifier(Modifier::BOLD);

        let mut lines = Vec::new();
        for (i, (title, bindings)) in HELP_SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*title, heading)));
            lines.extend(bindings.iter().map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!("{keys:>KEY_WIDTH$}"), self.theme.help_key),
                    Span::styled(format!(" {description}"), self.theme.help_desc),
                ])
            }));
        }
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
        let height = lines.len() as u16 + 2;

        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(popup);

        Clear.render(popup, buf);
        let block = Block::default()
            .title(" Help - ? or Esc to close ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(self.theme.background))
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_section() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        for title in ["Navigation", "Plugins", "Display"] {
            assert!(text.contains(title), "missing {title}");
        }
    }
}
