//! Main application state and logic.

mod constants;
mod navigation;
mod render;
pub mod state;
mod tasks;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use courselens_plugin::ManifestSource;
use courselens_state::{Action, AppState, ButtonColumn, Phase, Session, ViewModel};

use crate::event::KeyAction;
use crate::theme::Theme;

use self::constants::{SPINNER_FRAMES, TICK_INTERVAL_MS};
use self::navigation::Cursor;
use self::render::{RenderContext, render_app};
use self::state::{AppMode, Focus};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// The terminal front end of a [`Session`].
pub struct App {
    session: Arc<Session>,
    manifest: Arc<dyn ManifestSource>,
    snapshots: watch::Receiver<Arc<AppState>>,

    /// View of the latest snapshot.
    view: ViewModel,
    loading: bool,

    mode: AppMode,
    focus: Focus,
    data_cursor: Cursor,
    vis_cursor: Cursor,
    theme: Theme,

    /// Cancels background tasks on exit.
    cancel: CancellationToken,
    spinner: usize,
    needs_redraw: bool,
}

impl App {
    pub fn new(session: Arc<Session>, manifest: Arc<dyn ManifestSource>) -> Self {
        let snapshots = session.store().subscribe();
        let mut app = Self {
            session,
            manifest,
            snapshots,
            view: ViewModel::from_state(&AppState::default()),
            loading: false,
            mode: AppMode::default(),
            focus: Focus::default(),
            data_cursor: Cursor::default(),
            vis_cursor: Cursor::default(),
            theme: Theme::default(),
            cancel: CancellationToken::new(),
            spinner: 0,
            needs_redraw: true,
        };
        app.refresh_view();
        app
    }

    /// Run the application with async event loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        tasks::spawn_startup(
            Arc::clone(&self.session),
            Arc::clone(&self.manifest),
            self.cancel.clone(),
        );

        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while self.mode != AppMode::Quit {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_action(KeyAction::from_key_event(key_event));
                        }
                    }
                    self.needs_redraw = true;
                }

                Ok(()) = self.snapshots.changed() => {
                    self.refresh_view();
                }

                _ = interval.tick() => {
                    if self.loading || self.view.phase == Phase::Initializing {
                        self.spinner = (self.spinner + 1) % SPINNER_FRAMES.len();
                        self.needs_redraw = true;
                    }
                }
            }
        }

        self.cancel.cancel();
        Ok(())
    }

    /// Rebuild the cached view from the latest snapshot.
    fn refresh_view(&mut self) {
        let state = Arc::clone(&*self.snapshots.borrow_and_update());
        self.view = ViewModel::from_state(&state);
        self.loading = state.is_loading();
        self.data_cursor.resize(self.view.data_plugins.buttons.len());
        self.vis_cursor.resize(self.view.vis_plugins.buttons.len());
        self.needs_redraw = true;
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn focused_cursor(&mut self) -> &mut Cursor {
        match self.focus {
            Focus::DataPlugins => &mut self.data_cursor,
            Focus::Visualizations => &mut self.vis_cursor,
        }
    }

    fn focused_column(&self) -> &ButtonColumn {
        match self.focus {
            Focus::DataPlugins => &self.view.data_plugins,
            Focus::Visualizations => &self.view.vis_plugins,
        }
    }

    /// Handle a key action.
    fn handle_action(&mut self, action: KeyAction) {
        if self.mode == AppMode::Help {
            match action {
                KeyAction::ToggleHelp | KeyAction::Quit | KeyAction::Cancel => {
                    self.mode = AppMode::Normal;
                }
                KeyAction::ForceQuit => self.mode = AppMode::Quit,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::ToggleHelp => self.mode = AppMode::Help,
            KeyAction::ToggleTheme => self.theme = self.theme.toggle(),
            KeyAction::SwitchColumn => self.focus = self.focus.toggle(),
            KeyAction::MoveUp => self.focused_cursor().up(),
            KeyAction::MoveDown => self.focused_cursor().down(),
            KeyAction::JumpToTop => self.focused_cursor().first(),
            KeyAction::JumpToBottom => self.focused_cursor().end(),
            KeyAction::Activate => {
                let index = self.focused_cursor().index();
                self.activate(index);
            }
            KeyAction::ActivateNth(index) => {
                if index < self.focused_column().buttons.len() {
                    self.focused_cursor().select(index);
                    self.activate(index);
                }
            }
            KeyAction::Cancel | KeyAction::None => {}
        }
    }

    /// Press the button at `index` of the focused column.
    fn activate(&mut self, index: usize) {
        let Some(action) = self.focused_column().action_at(index) else {
            tracing::debug!(index, focus = ?self.focus, "Ignored disabled or missing button");
            return;
        };

        match action {
            Action::LoadDataPlugin(_) => {
                tasks::spawn_action(Arc::clone(&self.session), action, self.cancel.clone());
            }
            Action::SelectVisualization(index) => {
                if let Err(e) = self.session.select_visualization(index) {
                    tracing::warn!(index, error = %e, "Could not select visualization");
                }
            }
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = RenderContext {
            mode: self.mode,
            focus: self.focus,
            theme: &self.theme,
            view: &self.view,
            loading: self.loading,
            spinner: SPINNER_FRAMES[self.spinner % SPINNER_FRAMES.len()],
            data_cursor: self.data_cursor.index(),
            vis_cursor: self.vis_cursor.index(),
        };
        render_app(&ctx, area, buf);
    }
}
