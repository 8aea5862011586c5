//! Instructor summary derived from the analyzed courses.

use std::collections::HashMap;

use courselens_core::{CourseRecord, InstructorRecord, UNKNOWN_METRIC};
use courselens_plugin::{Element, VisualizationPlugin};

use super::{MAX_ROWS, Snapshots, analyzed_courses, no_courses, titled};
use crate::ui::format_metric;

const NAME: &str = "Instructor visualization plugin";

/// One row per instructor, most students first.
pub struct InstructorVisualizer {
    snapshots: Snapshots,
}

impl InstructorVisualizer {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }
}

impl VisualizationPlugin for InstructorVisualizer {
    fn name(&self) -> &str {
        NAME
    }

    fn render(&self) -> Element {
        let courses = analyzed_courses(&self.snapshots);
        if courses.is_empty() {
            return no_courses(NAME);
        }

        let instructors = summarize(&courses);
        if instructors.is_empty() {
            return Element::text(NAME, ["None of the analyzed courses names an instructor."]);
        }

        let total = instructors.len();
        let rows = instructors
            .iter()
            .take(MAX_ROWS)
            .map(|i| {
                vec![
                    i.name.clone(),
                    i.course_num.to_string(),
                    i.organization_names.join(", "),
                    i.total_students.to_string(),
                    format_metric(i.rate, 2),
                ]
            })
            .collect::<Vec<_>>();

        let header = ["Instructor", "Courses", "Organizations", "Students", "Rate"]
            .map(String::from)
            .to_vec();
        Element::table(titled(NAME, rows.len(), total), header, rows)
    }
}

/// Aggregate courses per instructor.
///
/// Students are summed, the rate is the mean of the known course rates, and
/// instructors are ordered by students, then by name.
fn summarize(courses: &[CourseRecord]) -> Vec<InstructorRecord> {
    let mut by_name: HashMap<&str, (InstructorRecord, f64, u32)> = HashMap::new();

    for course in courses {
        for name in &course.instructor_names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let (record, rate_sum, rated) = by_name
                .entry(name)
                .or_insert_with(|| (InstructorRecord::new(name), 0.0, 0));

            record.course_num += 1;
            record.course_names.push(course.name.clone());
            let organization = &course.organization_name;
            if !organization.is_empty() && !record.organization_names.contains(organization) {
                record.organization_names.push(organization.clone());
                record.organization_num += 1;
            }
            record.total_students += course.total_students.max(0);
            if let Some(rate) = course.known_rate() {
                *rate_sum += rate;
                *rated += 1;
            }
        }
    }

    let mut instructors: Vec<InstructorRecord> = by_name
        .into_values()
        .map(|(mut record, rate_sum, rated)| {
            record.rate = if rated > 0 {
                rate_sum / f64::from(rated)
            } else {
                UNKNOWN_METRIC
            };
            record
        })
        .collect();
    instructors.sort_by(|a, b| {
        b.total_students
            .cmp(&a.total_students)
            .then_with(|| a.name.cmp(&b.name))
    });
    instructors
}

#[cfg(test)]
mod tests {
    use super::*;
    use courselens_plugin::ElementBody;
    use courselens_state::Store;

    fn course(name: &str, instructors: &[&str], org: &str, students: i64, rate: f64) -> CourseRecord {
        let mut course = CourseRecord::new(0, name);
        course.instructor_names = instructors.iter().map(|s| s.to_string()).collect();
        course.organization_name = org.to_string();
        course.total_students = students;
        course.rate = rate;
        course
    }

    #[test]
    fn test_summarize() {
        let courses = vec![
            course("ML", &["Ng"], "Stanford", 100, 4.0),
            course("DL", &["Ng", "Katanforoosh"], "DeepLearning.AI", 50, 5.0),
            course("Unrated", &["Ng"], "Stanford", 10, -1.0),
        ];

        let instructors = summarize(&courses);
        assert_eq!(instructors.len(), 2);

        let ng = &instructors[0];
        assert_eq!(ng.name, "Ng");
        assert_eq!(ng.course_num, 3);
        assert_eq!(ng.organization_names, ["Stanford", "DeepLearning.AI"]);
        assert_eq!(ng.organization_num, 2);
        assert_eq!(ng.total_students, 160);
        assert_eq!(ng.rate, 4.5);

        assert_eq!(instructors[1].name, "Katanforoosh");
        assert_eq!(instructors[1].total_students, 50);
    }

    #[test]
    fn test_renders_table() {
        let store = Store::new();
        let plugin = InstructorVisualizer::new(store.subscribe());
        store.apply_load_result("Coursera", Vec::new(), vec![course("ML", &["Ng"], "", 7, -1.0)]);

        let ElementBody::Table(table) = plugin.render().body else {
            panic!("expected a table");
        };
        assert_eq!(table.rows, vec![vec![
            "Ng".to_string(),
            "1".to_string(),
            String::new(),
            "7".to_string(),
            "-".to_string(),
        ]]);
    }
}
