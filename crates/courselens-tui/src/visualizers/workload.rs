//! Estimated workload per course.

use courselens_plugin::{Bar, Element, VisualizationPlugin};

use super::{MAX_ROWS, Snapshots, analyzed_courses, no_courses, titled};

const NAME: &str = "Workload Visualizer";

/// Bars of estimated weekly workload, heaviest first.
pub struct WorkloadVisualizer {
    snapshots: Snapshots,
}

impl WorkloadVisualizer {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }
}

impl VisualizationPlugin for WorkloadVisualizer {
    fn name(&self) -> &str {
        NAME
    }

    fn render(&self) -> Element {
        let courses = analyzed_courses(&self.snapshots);
        if courses.is_empty() {
            return no_courses(NAME);
        }

        let mut bars: Vec<Bar> = courses
            .iter()
            .filter_map(|c| c.known_workload().map(|w| Bar::new(c.name.clone(), w)))
            .collect();
        if bars.is_empty() {
            return Element::text(NAME, ["None of the analyzed courses has a workload estimate."]);
        }

        bars.sort_by(|a, b| b.value.total_cmp(&a.value));
        let total = bars.len();
        bars.truncate(MAX_ROWS);
        Element::bars(titled(NAME, bars.len(), total), bars)
    }
}
