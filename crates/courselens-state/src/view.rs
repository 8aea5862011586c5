//! View model derived from a state snapshot.

use itertools::Itertools;

use courselens_plugin::Element;

use crate::lifecycle::Phase;
use crate::state::AppState;

pub const TITLE: &str = "Course Analysis Framework";

/// Placeholder for an empty button column.
pub const NO_PLUGIN_LOADED: &str = "No plugin loaded";

pub const INSTRUCTIONS: &[&str] = &[
    "Instructions:",
    "1. Select a data plugin from the list on the bottom left",
    "2. Wait for the plugin to finish loading",
    "3. Select a visualization plugin from the list on the bottom right",
];

pub const NOTES: &[&str] = &[
    "Notes:",
    "- You may switch between visualization plugins without loading the data plugin again",
    "- You may select multiple data plugins at the same time by clicking on other data plugins",
    "- The Udemy data plugin requires about 1 minute to load",
];

/// What activating a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Load the data plugin at this index of the current list.
    LoadDataPlugin(usize),
    /// Show the visualization plugin at this index.
    SelectVisualization(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
    pub action: Action,
}

/// A titled column of buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonColumn {
    pub heading: &'static str,
    pub buttons: Vec<Button>,
}

impl ButtonColumn {
    /// Text to show instead of the buttons, if there are none.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.buttons.is_empty().then_some(NO_PLUGIN_LOADED)
    }

    /// Action of the button at `index`, if it exists and is enabled.
    pub fn action_at(&self, index: usize) -> Option<Action> {
        self.buttons
            .get(index)
            .filter(|b| b.enabled)
            .map(|b| b.action)
    }
}

/// Everything a front end draws for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub title: &'static str,
    pub instructions: &'static [&'static str],
    pub notes: &'static [&'static str],
    pub phase: Phase,
    /// Loaded plugins line followed by the status line.
    pub status: String,
    pub data_plugins: ButtonColumn,
    pub vis_plugins: ButtonColumn,
    /// Output of the active visualization plugin.
    pub board: Option<Element>,
}

impl ViewModel {
    /// Build the view for a snapshot.
    ///
    /// Everything except `board` depends on `state` alone. `board` is the
    /// active plugin's output, and renderers that read the store themselves
    /// draw the store's latest data, which may be newer than `state`.
    ///
    /// Runs the active plugin's renderer, so call it once per frame rather
    /// than once per widget.
    pub fn from_state(state: &AppState) -> Self {
        let data_plugins = ButtonColumn {
            heading: "Data Plugins",
            buttons: state
                .data_plugins
                .iter()
                .enumerate()
                .map(|(i, plugin)| Button {
                    label: plugin.name.clone(),
                    enabled: !state.is_loaded(&plugin.name),
                    action: Action::LoadDataPlugin(i),
                })
                .collect(),
        };

        let vis_plugins = ButtonColumn {
            heading: "Visualization Plugins",
            buttons: state
                .vis_plugins
                .iter()
                .enumerate()
                .map(|(i, plugin)| Button {
                    label: plugin.name().to_string(),
                    enabled: state.chosen_vis != Some(i),
                    action: Action::SelectVisualization(i),
                })
                .collect(),
        };

        Self {
            title: TITLE,
            instructions: INSTRUCTIONS,
            notes: NOTES,
            phase: state.phase,
            status: status_text(state),
            data_plugins,
            vis_plugins,
            board: state.chosen_visualization().map(|p| p.render()),
        }
    }
}

fn status_text(state: &AppState) -> String {
    let loaded = if state.loaded_data_plugins.is_empty() {
        "None".to_string()
    } else {
        state.loaded_data_plugins.iter().join(", ")
    };
    format!("Loaded data plugins: {loaded}\n{}", state.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courselens_core::{CourseRecord, DataPluginDescriptor};
    use courselens_plugin::VisualizationDescriptor;

    fn state() -> AppState {
        AppState {
            data_plugins: vec![
                DataPluginDescriptor::new("Coursera"),
                DataPluginDescriptor::new("Udemy"),
            ],
            loaded_data_plugins: vec!["Udemy".to_string()],
            vis_plugins: vec![
                VisualizationDescriptor::new("A", || Element::text("A", ["from A"])),
                VisualizationDescriptor::new("B", || Element::empty("B")),
            ],
            chosen_vis: Some(0),
            ..AppState::default()
        }
    }

    #[test]
    fn test_empty_state() {
        let view = ViewModel::from_state(&AppState::default());
        assert_eq!(view.title, "Course Analysis Framework");
        assert_eq!(
            view.status,
            "Loaded data plugins: None\nPlease select a data plugin"
        );
        assert_eq!(view.data_plugins.placeholder(), Some("No plugin loaded"));
        assert_eq!(view.vis_plugins.placeholder(), Some("No plugin loaded"));
        assert!(view.board.is_none());
    }

    #[test]
    fn test_buttons() {
        let view = ViewModel::from_state(&state());

        let data = &view.data_plugins.buttons;
        assert_eq!(data.len(), 2);
        assert!(data[0].enabled);
        assert!(!data[1].enabled);
        assert_eq!(data[1].action, Action::LoadDataPlugin(1));
        assert_eq!(view.data_plugins.placeholder(), None);

        let vis = &view.vis_plugins.buttons;
        assert!(!vis[0].enabled);
        assert!(vis[1].enabled);
        assert_eq!(view.vis_plugins.action_at(0), None);
        assert_eq!(
            view.vis_plugins.action_at(1),
            Some(Action::SelectVisualization(1))
        );
    }

    #[test]
    fn test_status_lists_loaded_plugins() {
        let mut state = state();
        state.loaded_data_plugins.push("Coursera".to_string());
        state.status = "Done loading plugin!".to_string();

        let view = ViewModel::from_state(&state);
        assert_eq!(
            view.status,
            "Loaded data plugins: Udemy, Coursera\nDone loading plugin!"
        );
    }

    #[test]
    fn test_board_renders_chosen_plugin() {
        let view = ViewModel::from_state(&state());
        let board = view.board.unwrap();
        assert_eq!(board.title, "A");
    }

    #[test]
    fn test_board_reads_live_store() {
        let store = crate::store::Store::new();
        let rx = store.subscribe();
        store.append_visualization_plugins(vec![VisualizationDescriptor::new("Count", move || {
            Element::empty(rx.borrow().analyzed_courses.len().to_string())
        })]);
        store.select_visualization(0).unwrap();
        let older = store.snapshot();

        store.mark_loading();
        store.apply_load_result(
            "Udemy",
            vec![DataPluginDescriptor::new("Udemy")],
            vec![CourseRecord::new(1, "Rust")],
        );

        // Status and buttons follow the snapshot; the board follows the store.
        let view = ViewModel::from_state(&older);
        assert_eq!(
            view.status,
            "Loaded data plugins: None\nCurrent visualization plugin: Count"
        );
        assert!(view.data_plugins.buttons.is_empty());
        assert_eq!(view.board.unwrap().title, "1");
    }
}
