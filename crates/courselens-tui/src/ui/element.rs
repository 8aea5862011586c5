//! Widget showing a visualization plugin's element.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Widget, Wrap};

use courselens_plugin::{Bar, Element, ElementBody};

use super::bar::ValueBar;
use crate::theme::Theme;

/// Widest label column for bar charts.
const MAX_LABEL_WIDTH: usize = 32;

/// Width of the numeric column for bar charts.
const VALUE_WIDTH: u16 = 9;

/// The visualization board.
pub struct ElementView<'a> {
    element: Option<&'a Element>,
    theme: &'a Theme,
}

impl<'a> ElementView<'a> {
    pub fn new(element: Option<&'a Element>, theme: &'a Theme) -> Self {
        Self { element, theme }
    }

    fn render_message(&self, message: &str, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(message.to_string(), Style::new().fg(self.theme.muted)))
            .centered()
            .render(area, buf);
    }

    fn render_bars(&self, bars: &[Bar], area: Rect, buf: &mut Buffer) {
        let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        let label_width = bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH) as u16;
        let bar_x = area.x + label_width + 1 + VALUE_WIDTH + 1;
        let bar_width = (area.x + area.width).saturating_sub(bar_x);

        for (row, bar) in bars.iter().take(area.height as usize).enumerate() {
            let y = area.y + row as u16;
            let ratio = if max > 0.0 { bar.value / max } else { 0.0 };

            let label = truncate(&bar.label, label_width as usize);
            let line = Line::from(vec![
                Span::styled(
                    format!("{label:<width$} ", width = label_width as usize),
                    Style::new().fg(self.theme.foreground),
                ),
                Span::styled(
                    format!("{:>width$.1} ", bar.value, width = VALUE_WIDTH as usize),
                    self.theme.help_desc,
                ),
            ]);
            buf.set_line(area.x, y, &line, area.width);

            if bar_width > 0 {
                ValueBar::new(ratio)
                    .filled_style(Style::new().fg(self.theme.bar_color(ratio)))
                    .empty_style(self.theme.bar_empty)
                    .render(Rect::new(bar_x, y, bar_width, 1), buf);
            }
        }
    }
}

impl Widget for ElementView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.element {
            Some(element) => format!(" {} ", element.title),
            None => " Visualization ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(element) = self.element else {
            self.render_message("Select a visualization plugin", inner, buf);
            return;
        };
        if element.is_empty() {
            self.render_message("Nothing to show", inner, buf);
            return;
        }

        match &element.body {
            ElementBody::Empty => {}
            ElementBody::Text(lines) => {
                let lines: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
                Paragraph::new(lines)
                    .style(Style::new().fg(self.theme.foreground))
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            ElementBody::Table(table) => {
                let columns = table
                    .header
                    .len()
                    .max(table.rows.iter().map(Vec::len).max().unwrap_or(0));
                let widths = (0..columns).map(|i| {
                    if i == 0 {
                        Constraint::Fill(3)
                    } else {
                        Constraint::Fill(1)
                    }
                });
                let rows = table
                    .rows
                    .iter()
                    .map(|row| Row::new(row.iter().map(String::as_str)));
                Table::new(rows, widths)
                    .header(Row::new(table.header.iter().map(String::as_str)).style(self.theme.table_header))
                    .style(Style::new().fg(self.theme.foreground))
                    .column_spacing(2)
                    .render(inner, buf);
            }
            ElementBody::Bars(bars) => self.render_bars(bars, inner, buf),
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: Option<&Element>) -> Buffer {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        ElementView::new(element, &theme).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_placeholder_without_element() {
        let buf = render(None);
        let text: String = (0..8).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("Select a visualization plugin"));
    }

    #[test]
    fn test_table_header_and_rows() {
        let element = Element::table(
            "Courses",
            vec!["Course".to_string(), "Rate".to_string()],
            vec![vec!["Rust".to_string(), "4.5".to_string()]],
        );
        let buf = render(Some(&element));
        assert!(row_text(&buf, 0).contains("Courses"));
        assert!(row_text(&buf, 1).contains("Course"));
        assert!(row_text(&buf, 2).contains("Rust"));
        assert!(row_text(&buf, 2).contains("4.5"));
    }

    #[test]
    fn test_bars_scale_to_largest() {
        let element = Element::bars("Workload", vec![Bar::new("a", 10.0), Bar::new("b", 5.0)]);
        let buf = render(Some(&element));
        let first = row_text(&buf, 1);
        let second = row_text(&buf, 2);
        assert!(first.contains("10.0"));
        assert!(first.matches('█').count() > second.matches('█').count());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long course name", 6), "a lon…");
    }
}
