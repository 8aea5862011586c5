//! UI components and widgets.

mod bar;
mod buttons;
mod element;
mod help;

pub use bar::ValueBar;
pub use buttons::ButtonList;
pub use element::ElementView;
pub use help::HelpOverlay;

use ratatui::layout::{Constraint, Layout, Rect};

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub instructions: Rect,
    pub status: Rect,
    pub board: Rect,
    pub data_plugins: Rect,
    pub vis_plugins: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    ///
    /// `button_rows` is the length of the longer button column; the button
    /// row grows with it up to a third of the screen.
    pub fn new(area: Rect, instruction_rows: u16, button_rows: u16) -> Self {
        let buttons_height = (button_rows.max(1) + 2).min((area.height / 3).max(3));

        let [header, instructions, status, board, buttons, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(instruction_rows + 2),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(buttons_height),
            Constraint::Length(1),
        ])
        .areas(area);

        let [data_plugins, vis_plugins] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(buttons);

        Self {
            header,
            instructions,
            status,
            board,
            data_plugins,
            vis_plugins,
            footer,
        }
    }
}

/// Format a metric the backend reports as negative when unknown.
pub fn format_metric(value: f64, precision: usize) -> String {
    if value < 0.0 {
        "-".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = AppLayout::new(area, 4, 3);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.instructions.height, 6);
        assert_eq!(layout.data_plugins.height, 5);
        assert_eq!(layout.data_plugins.y, layout.vis_plugins.y);
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn test_button_row_is_capped() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), 4, 50);
        assert_eq!(layout.data_plugins.height, 10);
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(-1.0, 1), "-");
        assert_eq!(format_metric(4.256, 2), "4.26");
        assert_eq!(format_metric(12.0, 0), "12");
    }
}
