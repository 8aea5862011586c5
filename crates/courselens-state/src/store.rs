//! Snapshot store.
//!
//! The store is the only writer of [`AppState`]. Each method is one
//! transition applied under the watch channel's lock, so a subscriber sees
//! either the whole transition or none of it.

use std::sync::Arc;

use tokio::sync::watch;

use courselens_core::{CourseRecord, DataPluginDescriptor};
use courselens_plugin::VisualizationDescriptor;

use crate::error::{StateError, StateResult};
use crate::lifecycle::Phase;
use crate::state::{AppState, status};

/// Publishes [`AppState`] snapshots.
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<Arc<AppState>>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store holding the initial state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(AppState::default()));
        Self { tx: Arc::new(tx) }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&*self.tx.borrow())
    }

    /// Subscribe to snapshots.
    ///
    /// The receiver starts at the current snapshot and is notified of every
    /// later transition.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.tx.subscribe()
    }

    fn update(&self, transition: &str, f: impl FnOnce(&mut AppState)) {
        self.tx.send_modify(|state| f(Arc::make_mut(state)));
        tracing::debug!(transition, "state updated");
    }

    /// `Uninitialized -> Initializing`.
    pub fn begin_startup(&self) -> StateResult<()> {
        let mut result = Ok(());
        self.tx.send_if_modified(|state| {
            if state.phase.has_started() {
                result = Err(StateError::AlreadyStarted { phase: state.phase });
                return false;
            }
            Arc::make_mut(state).phase = Phase::Initializing;
            true
        });
        if result.is_ok() {
            tracing::debug!(transition = "begin_startup", "state updated");
        }
        result
    }

    /// `Initializing -> Ready`, installing the discovered data plugins and
    /// the first status line.
    pub fn complete_startup(
        &self,
        data_plugins: Vec<DataPluginDescriptor>,
        status: impl Into<String>,
    ) {
        let status = status.into();
        self.update("complete_startup", |state| {
            state.phase = Phase::Ready;
            state.data_plugins = data_plugins;
            state.status = status;
        });
    }

    /// `Initializing -> Failed`, reporting why.
    pub fn fail_startup(&self, reason: &str) {
        self.update("fail_startup", |state| {
            state.phase = Phase::Failed;
            state.status = status::startup_failed(reason);
        });
    }

    /// Extend the visualization plugins, keeping their order.
    pub fn append_visualization_plugins(&self, plugins: Vec<VisualizationDescriptor>) {
        if plugins.is_empty() {
            return;
        }
        self.update("append_visualization_plugins", |state| {
            state.vis_plugins.extend(plugins);
        });
    }

    /// Record that a data plugin load has been requested.
    pub fn mark_loading(&self) {
        self.update("mark_loading", |state| {
            state.pending_loads += 1;
            state.status = status::LOADING.to_string();
        });
    }

    /// Install the result of a completed data plugin load.
    ///
    /// Both lists are replaced by the server's, and `name` is recorded as
    /// loaded unless it already is.
    pub fn apply_load_result(
        &self,
        name: &str,
        data_plugins: Vec<DataPluginDescriptor>,
        analyzed_courses: Vec<CourseRecord>,
    ) {
        self.update("apply_load_result", |state| {
            if !state.is_loaded(name) {
                state.loaded_data_plugins.push(name.to_string());
            }
            state.data_plugins = data_plugins;
            state.analyzed_courses = Arc::from(analyzed_courses);
            finish_load(state, status::LOADED.to_string());
        });
    }

    /// Settle a requested load that turned out to be unnecessary.
    pub fn skip_load(&self) {
        self.update("skip_load", |state| {
            finish_load(state, status::LOADED.to_string());
        });
    }

    /// Settle a requested load whose caller gave up on it.
    pub fn abandon_load(&self) {
        self.update("abandon_load", |state| {
            finish_load(state, status::CANCELLED.to_string());
        });
    }

    /// Report a failed data plugin load. Collections are left untouched.
    pub fn mark_load_failed(&self, name: &str, reason: &str) {
        self.update("mark_load_failed", |state| {
            state.pending_loads = state.pending_loads.saturating_sub(1);
            state.status = status::load_failed(name, reason);
        });
    }

    /// Make the visualization plugin at `index` the active one.
    pub fn select_visualization(&self, index: usize) -> StateResult<()> {
        let mut result = Ok(());
        self.tx.send_if_modified(|state| {
            let Some(plugin) = state.vis_plugins.get(index) else {
                result = Err(StateError::InvalidSelection {
                    index,
                    len: state.vis_plugins.len(),
                });
                return false;
            };
            let text = if state.is_loading() {
                status::loading_with_visualization(plugin.name())
            } else {
                status::visualization(plugin.name())
            };
            let state = Arc::make_mut(state);
            state.chosen_vis = Some(index);
            state.status = text;
            true
        });
        if result.is_ok() {
            tracing::debug!(transition = "select_visualization", index, "state updated");
        }
        result
    }

    pub fn set_status(&self, text: impl Into<String>) {
        let text = text.into();
        self.update("set_status", |state| state.status = text);
    }
}

/// Count a load as finished; the loading message stays while others are
/// still pending.
fn finish_load(state: &mut AppState, done: String) {
    state.pending_loads = state.pending_loads.saturating_sub(1);
    state.status = if state.pending_loads > 0 {
        status::LOADING.to_string()
    } else {
        done
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use courselens_plugin::Element;

    fn descriptors(names: &[&str]) -> Vec<DataPluginDescriptor> {
        names.iter().map(|n| DataPluginDescriptor::new(*n)).collect()
    }

    fn vis(name: &'static str) -> VisualizationDescriptor {
        VisualizationDescriptor::new(name, move || Element::empty(name))
    }

    #[test]
    fn test_startup_is_one_shot() {
        let store = Store::new();
        store.begin_startup().unwrap();
        assert_eq!(store.snapshot().phase, Phase::Initializing);

        let err = store.begin_startup().unwrap_err();
        assert_eq!(
            err,
            StateError::AlreadyStarted {
                phase: Phase::Initializing
            }
        );

        store.complete_startup(descriptors(&["Udemy"]), status::INITIAL);
        assert_eq!(store.snapshot().phase, Phase::Ready);
        assert!(store.begin_startup().is_err());
    }

    #[test]
    fn test_startup_status_arrives_with_ready() {
        let store = Store::new();
        store.begin_startup().unwrap();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.complete_startup(descriptors(&["Udemy"]), status::plugins_skipped(2));
        let ready = rx.borrow_and_update().clone();
        assert_eq!(ready.phase, Phase::Ready);
        assert_eq!(ready.status, status::plugins_skipped(2));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_fail_startup_reports_reason() {
        let store = Store::new();
        store.begin_startup().unwrap();
        store.fail_startup("connection refused");

        let state = store.snapshot();
        assert_eq!(state.phase, Phase::Failed);
        assert!(state.status.contains("connection refused"));
        assert!(state.data_plugins.is_empty());
    }

    #[test]
    fn test_load_result_is_one_transition() {
        let store = Store::new();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.mark_loading();
        assert!(rx.has_changed().unwrap());
        let loading = rx.borrow_and_update().clone();
        assert_eq!(loading.status, status::LOADING);
        assert!(loading.loaded_data_plugins.is_empty());

        store.apply_load_result(
            "Udemy",
            descriptors(&["Udemy", "Coursera"]),
            vec![CourseRecord::new(1, "Rust")],
        );
        let loaded = rx.borrow_and_update().clone();
        assert_eq!(loaded.loaded_data_plugins, vec!["Udemy".to_string()]);
        assert_eq!(loaded.data_plugins.len(), 2);
        assert_eq!(loaded.analyzed_courses.len(), 1);
        assert_eq!(loaded.status, status::LOADED);
        assert_eq!(loaded.pending_loads, 0);

        // Earlier snapshots are untouched.
        assert!(loading.analyzed_courses.is_empty());
    }

    #[test]
    fn test_loaded_names_stay_unique() {
        let store = Store::new();
        for _ in 0..3 {
            store.mark_loading();
            store.apply_load_result("Udemy", descriptors(&["Udemy"]), Vec::new());
        }
        assert_eq!(store.snapshot().loaded_data_plugins, vec!["Udemy".to_string()]);
    }

    #[test]
    fn test_status_stays_loading_while_loads_pending() {
        let store = Store::new();
        store.mark_loading();
        store.mark_loading();

        store.apply_load_result("Udemy", descriptors(&["Udemy", "Coursera"]), Vec::new());
        assert_eq!(store.snapshot().status, status::LOADING);

        store.skip_load();
        let state = store.snapshot();
        assert_eq!(state.status, status::LOADED);
        assert_eq!(state.pending_loads, 0);
    }

    #[test]
    fn test_abandoned_load_is_settled() {
        let store = Store::new();
        store.mark_loading();
        store.mark_loading();

        store.abandon_load();
        let state = store.snapshot();
        assert_eq!(state.pending_loads, 1);
        assert_eq!(state.status, status::LOADING);

        store.abandon_load();
        let state = store.snapshot();
        assert!(!state.is_loading());
        assert_eq!(state.status, status::CANCELLED);
    }

    #[test]
    fn test_failed_load_keeps_collections() {
        let store = Store::new();
        store.mark_loading();
        store.apply_load_result("Udemy", descriptors(&["Udemy"]), vec![CourseRecord::new(1, "a")]);
        let before = store.snapshot();

        store.mark_loading();
        store.mark_load_failed("Coursera", "HTTP 500");

        let after = store.snapshot();
        assert_eq!(after.loaded_data_plugins, before.loaded_data_plugins);
        assert_eq!(after.data_plugins, before.data_plugins);
        assert_eq!(after.analyzed_courses, before.analyzed_courses);
        assert_eq!(after.status, status::load_failed("Coursera", "HTTP 500"));
    }

    #[test]
    fn test_select_visualization() {
        let store = Store::new();
        store.append_visualization_plugins(vec![vis("A"), vis("B")]);

        store.select_visualization(1).unwrap();
        let state = store.snapshot();
        assert_eq!(state.chosen_vis, Some(1));
        assert_eq!(state.status, status::visualization("B"));

        let err = store.select_visualization(2).unwrap_err();
        assert_eq!(err, StateError::InvalidSelection { index: 2, len: 2 });
        assert_eq!(store.snapshot().chosen_vis, Some(1));
    }

    #[test]
    fn test_selection_keeps_loading_message() {
        let store = Store::new();
        store.append_visualization_plugins(vec![vis("A")]);
        store.mark_loading();

        store.select_visualization(0).unwrap();
        let state = store.snapshot();
        assert_eq!(state.chosen_vis, Some(0));
        assert_eq!(state.status, status::loading_with_visualization("A"));
        assert!(state.status.starts_with(status::LOADING));

        store.apply_load_result("Udemy", descriptors(&["Udemy"]), Vec::new());
        assert_eq!(store.snapshot().status, status::LOADED);
    }

    #[test]
    fn test_rejected_selection_does_not_notify() {
        let store = Store::new();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        assert!(store.select_visualization(0).is_err());
        assert!(!rx.has_changed().unwrap());
    }
}
