//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use courselens_state::{Phase, ViewModel};

use crate::theme::Theme;
use crate::ui::{AppLayout, ButtonList, ElementView, HelpOverlay};

use super::state::{AppMode, Focus};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub mode: AppMode,
    pub focus: Focus,
    pub theme: &'a Theme,
    pub view: &'a ViewModel,
    pub loading: bool,
    pub spinner: char,
    pub data_cursor: usize,
    pub vis_cursor: usize,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    let instruction_rows = ctx.view.instructions.len().max(ctx.view.notes.len()) as u16;
    let button_rows = ctx
        .view
        .data_plugins
        .buttons
        .len()
        .max(ctx.view.vis_plugins.buttons.len()) as u16;
    let layout = AppLayout::new(area, instruction_rows, button_rows);

    render_header(ctx, layout.header, buf);
    render_instructions(ctx, layout.instructions, buf);
    render_status(ctx, layout.status, buf);
    ElementView::new(ctx.view.board.as_ref(), ctx.theme).render(layout.board, buf);

    ButtonList::new(&ctx.view.data_plugins, ctx.theme)
        .cursor(ctx.data_cursor)
        .focused(ctx.focus == Focus::DataPlugins)
        .render(layout.data_plugins, buf);
    ButtonList::new(&ctx.view.vis_plugins, ctx.theme)
        .cursor(ctx.vis_cursor)
        .focused(ctx.focus == Focus::Visualizations)
        .render(layout.vis_plugins, buf);

    render_footer(ctx, layout.footer, buf);

    if ctx.mode == AppMode::Help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(
        format!(" {} ", ctx.view.title),
        ctx.theme.title.add_modifier(Modifier::BOLD),
    );

    let phase_color = match ctx.view.phase {
        Phase::Uninitialized | Phase::Initializing => ctx.theme.info,
        Phase::Ready => ctx.theme.success,
        Phase::Failed => ctx.theme.error,
    };
    let mut spans = vec![
        title,
        Span::styled(format!(" {} ", ctx.view.phase), Style::default().fg(phase_color)),
    ];
    if ctx.loading || ctx.view.phase == Phase::Initializing {
        spans.push(Span::styled(
            format!(" {} ", ctx.spinner),
            Style::default().fg(ctx.theme.warning),
        ));
    }

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.header)
        .render(area, buf);
}

fn render_instructions(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ctx.theme.border);
    let inner = block.inner(area);
    block.render(area, buf);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(inner);
    text_column(ctx.view.instructions, ctx.theme).render(left, buf);
    text_column(ctx.view.notes, ctx.theme).render(right, buf);
}

/// A paragraph whose first line is a bold heading.
fn text_column<'a>(lines: &'a [&'a str], theme: &Theme) -> Paragraph<'a> {
    let lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(Span::styled(
                    *line,
                    Style::default()
                        .fg(theme.info)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(*line)
            }
        })
        .collect();
    Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground))
        .wrap(Wrap { trim: true })
}

fn render_status(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(" Status ")
        .title_style(ctx.theme.title)
        .borders(Borders::ALL)
        .border_style(ctx.theme.border);

    let status_color = match ctx.view.phase {
        Phase::Failed => ctx.theme.error,
        _ if ctx.loading => ctx.theme.warning,
        _ => ctx.theme.foreground,
    };
    let lines: Vec<Line> = ctx
        .view
        .status
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let color = if i == 0 { ctx.theme.muted } else { status_color };
            Line::from(Span::styled(line, Style::default().fg(color)))
        })
        .collect();

    Paragraph::new(lines).block(block).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let keys: &[(&str, &str)] = match ctx.mode {
        AppMode::Help => &[("?", "Close")],
        _ => &[
            ("j/k", "Nav"),
            ("Tab", "Column"),
            ("Enter", "Activate"),
            ("t", "Theme"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {} ", key), ctx.theme.help_key),
                Span::styled(format!("{} ", desc), ctx.theme.help_desc),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}
