//! The application state snapshot.

use std::sync::Arc;

use courselens_core::{CourseRecord, DataPluginDescriptor};
use courselens_plugin::VisualizationDescriptor;

use crate::lifecycle::Phase;

/// Status line texts.
pub mod status {
    /// Shown until the first data plugin load.
    pub const INITIAL: &str = "Please select a data plugin";

    /// Shown while any data plugin load is in flight.
    pub const LOADING: &str = "Loading... Please wait";

    /// Shown once the last pending load has completed.
    pub const LOADED: &str = "Done loading plugin!";

    /// Shown when the last pending load was given up before finishing.
    pub const CANCELLED: &str = "Loading cancelled";

    /// Names the active visualization plugin.
    pub fn visualization(name: &str) -> String {
        format!("Current visualization plugin: {name}")
    }

    /// Names the active visualization plugin while loads are in flight.
    pub fn loading_with_visualization(name: &str) -> String {
        format!("{LOADING} (current visualization plugin: {name})")
    }

    pub fn load_failed(name: &str, reason: &str) -> String {
        format!("Failed to load data plugin {name}: {reason}")
    }

    pub fn startup_failed(reason: &str) -> String {
        format!("Could not start: {reason}")
    }

    /// Initial status when some visualization plugins could not be loaded.
    pub fn plugins_skipped(failed: usize) -> String {
        let noun = if failed == 1 { "plugin" } else { "plugins" };
        format!("{INITIAL} ({failed} visualization {noun} failed to load)")
    }
}

/// Everything the application knows at one point in time.
///
/// Snapshots are immutable; the [`Store`](crate::Store) produces a new one
/// for every transition.
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: Phase,

    /// Human-readable progress or result of the last action.
    pub status: String,

    /// Data plugins as last reported by the server.
    pub data_plugins: Vec<DataPluginDescriptor>,

    /// Names of loaded data plugins, unique, in load order.
    pub loaded_data_plugins: Vec<String>,

    /// Visualization plugins in manifest order. Append-only.
    pub vis_plugins: Vec<VisualizationDescriptor>,

    /// Index into `vis_plugins` of the active visualization.
    pub chosen_vis: Option<usize>,

    /// Courses from the most recently completed load.
    pub analyzed_courses: Arc<[CourseRecord]>,

    /// Data plugin loads requested but not yet finished.
    pub pending_loads: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Uninitialized,
            status: status::INITIAL.to_string(),
            data_plugins: Vec::new(),
            loaded_data_plugins: Vec::new(),
            vis_plugins: Vec::new(),
            chosen_vis: None,
            analyzed_courses: Arc::from(Vec::new()),
            pending_loads: 0,
        }
    }
}

impl AppState {
    /// Check if a data plugin has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded_data_plugins.iter().any(|n| n == name)
    }

    /// Position of a data plugin in the current list.
    pub fn data_plugin_index(&self, name: &str) -> Option<usize> {
        self.data_plugins.iter().position(|p| p.name == name)
    }

    /// The active visualization plugin, if any.
    pub fn chosen_visualization(&self) -> Option<&VisualizationDescriptor> {
        self.chosen_vis.and_then(|i| self.vis_plugins.get(i))
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }
}
