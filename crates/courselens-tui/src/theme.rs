//! Color theme for the TUI.
//!
//! Dark and light themes built on a slate palette with Tailwind CSS
//! accent colors.

use ratatui::style::{Color, Modifier, Style};

/// Theme variant (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Buttons
    pub selected: Style,
    pub button: Style,
    pub button_disabled: Style,

    // Bar gradient, by share of the largest value
    pub bar_high: Color,
    pub bar_mid: Color,
    pub bar_low: Color,
    pub bar_empty: Style,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub table_header: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,
}

/// The handful of colors a theme is derived from.
struct Palette {
    variant: ThemeVariant,
    background: Color,
    foreground: Color,
    /// Panel backgrounds (header, footer, cursor row).
    surface: Color,
    /// Secondary text and borders.
    subtle: Color,
    faint: Color,
    accent: Color,
    success: Color,
    warning: Color,
    error: Color,
    /// Bar gradient from short to long.
    bars: [Color; 3],
}

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        Self::from_palette(Palette {
            variant: ThemeVariant::Dark,
            background: Color::Rgb(15, 23, 42),
            foreground: Color::Rgb(241, 245, 249),
            surface: Color::Rgb(30, 41, 59),
            subtle: Color::Rgb(148, 163, 184),
            faint: Color::Rgb(71, 85, 105),
            accent: Color::Rgb(96, 165, 250),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),
            bars: [
                Color::Rgb(34, 197, 94),
                Color::Rgb(34, 211, 238),
                Color::Rgb(249, 115, 22),
            ],
        })
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        Self::from_palette(Palette {
            variant: ThemeVariant::Light,
            background: Color::Rgb(248, 250, 252),
            foreground: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(226, 232, 240),
            subtle: Color::Rgb(71, 85, 105),
            faint: Color::Rgb(148, 163, 184),
            accent: Color::Rgb(29, 78, 216),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
            bars: [
                Color::Rgb(22, 163, 74),
                Color::Rgb(8, 145, 178),
                Color::Rgb(234, 88, 12),
            ],
        })
    }

    fn from_palette(p: Palette) -> Self {
        let bold = Modifier::BOLD;
        Self {
            variant: p.variant,
            background: p.background,
            foreground: p.foreground,
            muted: p.subtle,

            selected: Style::new().bg(p.surface).fg(p.foreground).add_modifier(bold),
            button: Style::new().fg(p.foreground),
            button_disabled: Style::new().fg(p.faint).add_modifier(Modifier::CROSSED_OUT),

            bar_low: p.bars[0],
            bar_mid: p.bars[1],
            bar_high: p.bars[2],
            bar_empty: Style::new().fg(p.surface),

            success: p.success,
            warning: p.warning,
            error: p.error,
            info: p.accent,

            border: Style::new().fg(p.faint),
            border_focused: Style::new().fg(p.accent),
            title: Style::new().fg(p.accent).add_modifier(bold),
            help_key: Style::new().fg(p.accent).add_modifier(bold),
            help_desc: Style::new().fg(p.subtle),
            table_header: Style::new()
                .fg(p.foreground)
                .add_modifier(bold | Modifier::UNDERLINED),

            header: Style::new().bg(p.surface).fg(p.foreground),
            footer: Style::new().bg(p.surface).fg(p.subtle),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }

    /// Color of a bar at `ratio` of the longest one.
    pub fn bar_color(&self, ratio: f64) -> Color {
        if ratio > 2.0 / 3.0 {
            self.bar_high
        } else if ratio > 1.0 / 3.0 {
            self.bar_mid
        } else {
            self.bar_low
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
