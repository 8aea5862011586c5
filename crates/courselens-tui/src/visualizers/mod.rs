//! Built-in visualization plugins.
//!
//! Each plugin keeps a receiver on the store and renders from whatever
//! snapshot is current when it is asked to draw.

mod example;
mod instructor;
mod price_rate;
mod workload;

use std::sync::Arc;

use tokio::sync::watch;

use courselens_core::CourseRecord;
use courselens_plugin::{Element, PluginRegistry};
use courselens_state::{AppState, Store};

pub use example::ExampleVisualizer;
pub use instructor::InstructorVisualizer;
pub use price_rate::PriceRateVisualizer;
pub use workload::WorkloadVisualizer;

/// Manifest used when no manifest file is configured.
pub const DEFAULT_MANIFEST: &str = include_str!("../../assets/plugins.txt");

/// Shown by every plugin before any course has been analyzed.
pub const NO_COURSES: &str = "No courses analyzed yet. Load a data plugin first.";

/// Most rows a plugin puts on the board.
const MAX_ROWS: usize = 50;

type Snapshots = watch::Receiver<Arc<AppState>>;

/// Registry with every built-in plugin, keyed by its manifest path.
pub fn builtin_registry(store: &Store) -> PluginRegistry {
    let snapshots = store.subscribe();
    let mut registry = PluginRegistry::new();

    let rx = snapshots.clone();
    registry.register("ExampleVisualizer", move || ExampleVisualizer::new(rx.clone()));
    let rx = snapshots.clone();
    registry.register("WorkloadVisualizer", move || WorkloadVisualizer::new(rx.clone()));
    let rx = snapshots.clone();
    registry.register("PriceRateVisualizer", move || PriceRateVisualizer::new(rx.clone()));
    registry.register("InstructorVisualizer", move || {
        InstructorVisualizer::new(snapshots.clone())
    });

    registry
}

/// Courses of the store's latest snapshot, not of the one being drawn.
fn analyzed_courses(snapshots: &Snapshots) -> Arc<[CourseRecord]> {
    Arc::clone(&snapshots.borrow().analyzed_courses)
}

fn no_courses(title: &str) -> Element {
    Element::text(title, [NO_COURSES])
}

/// Title with a note when rows were cut off.
fn titled(name: &str, shown: usize, total: usize) -> String {
    if shown < total {
        format!("{name} (top {shown} of {total})")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courselens_plugin::{InlineManifest, PluginConfig, VisualizationLoader};

    #[tokio::test]
    async fn test_default_manifest_loads_every_builtin() {
        let store = Store::new();
        let loader = VisualizationLoader::new(builtin_registry(&store), PluginConfig::default());

        let report = loader
            .load_all(&InlineManifest::new(DEFAULT_MANIFEST))
            .await
            .unwrap();

        assert!(report.is_clean());
        let names: Vec<&str> = report.plugins.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            [
                "Example Visualizer",
                "Workload Visualizer",
                "Price-Rate Visualization plugin",
                "Instructor visualization plugin",
            ]
        );
    }

    #[test]
    fn test_titled() {
        assert_eq!(titled("Courses", 3, 3), "Courses");
        assert_eq!(titled("Courses", 50, 80), "Courses (top 50 of 80)");
    }
}
