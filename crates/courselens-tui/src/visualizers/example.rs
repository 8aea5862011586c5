//! Course overview table.

use itertools::Itertools;

use courselens_plugin::{Element, VisualizationPlugin};

use super::{MAX_ROWS, Snapshots, analyzed_courses, no_courses, titled};
use crate::ui::format_metric;

const NAME: &str = "Example Visualizer";

/// One row per analyzed course.
pub struct ExampleVisualizer {
    snapshots: Snapshots,
}

impl ExampleVisualizer {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }
}

impl VisualizationPlugin for ExampleVisualizer {
    fn name(&self) -> &str {
        NAME
    }

    fn render(&self) -> Element {
        let courses = analyzed_courses(&self.snapshots);
        if courses.is_empty() {
            return no_courses(NAME);
        }

        let header = ["Course", "Year", "Organization", "Instructors", "Students", "Rate"]
            .map(String::from)
            .to_vec();
        let rows = courses
            .iter()
            .take(MAX_ROWS)
            .map(|course| {
                vec![
                    course.name.clone(),
                    course.year.to_string(),
                    course.organization_name.clone(),
                    course.instructor_names.iter().join(", "),
                    course.total_students.to_string(),
                    format_metric(course.rate, 2),
                ]
            })
            .collect::<Vec<_>>();

        Element::table(titled(NAME, rows.len(), courses.len()), header, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courselens_core::CourseRecord;
    use courselens_plugin::ElementBody;
    use courselens_state::Store;

    #[test]
    fn test_empty_until_loaded() {
        let store = Store::new();
        let plugin = ExampleVisualizer::new(store.subscribe());
        assert_eq!(plugin.render(), no_courses(NAME));
    }

    #[test]
    fn test_one_row_per_course() {
        let store = Store::new();
        let plugin = ExampleVisualizer::new(store.subscribe());

        let mut course = CourseRecord::new(1, "Machine Learning");
        course.year = 2021;
        course.instructor_names = vec!["Ng".to_string(), "Koller".to_string()];
        store.apply_load_result("Coursera", Vec::new(), vec![course, CourseRecord::new(2, "Rust")]);

        let element = plugin.render();
        assert_eq!(element.title, NAME);
        let ElementBody::Table(table) = element.body else {
            panic!("expected a table");
        };
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Machine Learning");
        assert_eq!(table.rows[0][1], "2021");
        assert_eq!(table.rows[0][3], "Ng, Koller");
        assert_eq!(table.rows[1][5], "-");
    }
}
