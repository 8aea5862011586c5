//! Price against rate.

use courselens_plugin::{Element, VisualizationPlugin};

use super::{MAX_ROWS, Snapshots, analyzed_courses, no_courses, titled};
use crate::ui::format_metric;

const NAME: &str = "Price-Rate Visualization plugin";

/// Rated courses ordered by price, cheapest first.
pub struct PriceRateVisualizer {
    snapshots: Snapshots,
}

impl PriceRateVisualizer {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }
}

impl VisualizationPlugin for PriceRateVisualizer {
    fn name(&self) -> &str {
        NAME
    }

    fn render(&self) -> Element {
        let courses = analyzed_courses(&self.snapshots);
        if courses.is_empty() {
            return no_courses(NAME);
        }

        let mut points: Vec<(&str, f64, f64)> = courses
            .iter()
            .filter(|c| c.price >= 0.0)
            .filter_map(|c| c.known_rate().map(|rate| (c.name.as_str(), c.price, rate)))
            .collect();
        if points.is_empty() {
            return Element::text(NAME, ["None of the analyzed courses has both a price and a rate."]);
        }

        points.sort_by(|a, b| a.1.total_cmp(&b.1).then(b.2.total_cmp(&a.2)));
        let total = points.len();
        let rows = points
            .into_iter()
            .take(MAX_ROWS)
            .map(|(name, price, rate)| {
                vec![name.to_string(), format_metric(price, 2), format_metric(rate, 2)]
            })
            .collect::<Vec<_>>();

        let header = vec!["Course".to_string(), "Price".to_string(), "Rate".to_string()];
        Element::table(titled(NAME, rows.len(), total), header, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courselens_core::CourseRecord;
    use courselens_plugin::ElementBody;
    use courselens_state::Store;

    fn course(name: &str, price: f64, rate: f64) -> CourseRecord {
        let mut course = CourseRecord::new(0, name);
        course.price = price;
        course.rate = rate;
        course
    }

    #[test]
    fn test_sorted_by_price() {
        let store = Store::new();
        let plugin = PriceRateVisualizer::new(store.subscribe());
        store.apply_load_result(
            "Udemy",
            Vec::new(),
            vec![
                course("pricey", 199.99, 4.1),
                course("unrated", 10.0, -1.0),
                course("free", 0.0, 4.7),
            ],
        );

        let ElementBody::Table(table) = plugin.render().body else {
            panic!("expected a table");
        };
        assert_eq!(
            table.rows,
            vec![
                vec!["free".to_string(), "0.00".to_string(), "4.70".to_string()],
                vec!["pricey".to_string(), "199.99".to_string(), "4.10".to_string()],
            ]
        );
    }
}
