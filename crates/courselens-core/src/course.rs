//! Course records produced by the analysis backend.

use serde::{Deserialize, Serialize};

/// Value the backend reports for a metric it could not compute.
pub const UNKNOWN_METRIC: f64 = -1.0;

/// Highest rating a review can give.
const MAX_RATE: f64 = 5.0;

/// One analyzed course, aggregated across all loaded data plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRecord {
    pub id: i64,
    pub year: i32,
    pub name: String,
    pub description: String,
    pub instructor_names: Vec<String>,
    pub organization_name: String,
    pub category: String,
    pub level: String,
    pub total_students: i64,
    pub total_hours: f64,
    pub total_weeks: i32,
    /// Estimated total workload in hours (negative when unknown).
    pub estimated_workload: f64,
    /// Average course rate in `[0, 5]` (negative when unknown).
    pub rate: f64,
    pub price: f64,
    /// Reviews the rate and workload were derived from.
    ///
    /// The backend sends either a single review object or an array.
    #[serde(deserialize_with = "reviews::deserialize")]
    pub reviews: Vec<CourseReview>,
}

impl Default for CourseRecord {
    fn default() -> Self {
        Self {
            id: 0,
            year: 0,
            name: String::new(),
            description: String::new(),
            instructor_names: Vec::new(),
            organization_name: String::new(),
            category: String::new(),
            level: String::new(),
            total_students: 0,
            total_hours: 0.0,
            total_weeks: 0,
            estimated_workload: UNKNOWN_METRIC,
            rate: UNKNOWN_METRIC,
            price: 0.0,
            reviews: Vec::new(),
        }
    }
}

impl CourseRecord {
    /// Create a course with the given id and name; all metrics unknown.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// The course rate, if the backend was able to compute one.
    pub fn known_rate(&self) -> Option<f64> {
        (0.0..=MAX_RATE).contains(&self.rate).then_some(self.rate)
    }

    /// The estimated workload, if the backend was able to compute one.
    pub fn known_workload(&self) -> Option<f64> {
        (self.estimated_workload >= 0.0).then_some(self.estimated_workload)
    }

    /// Check whether the named instructor teaches this course.
    pub fn is_taught_by(&self, instructor: &str) -> bool {
        self.instructor_names.iter().any(|n| n == instructor)
    }
}

/// A single review of a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseReview {
    /// Course rating in `[0, 5]`.
    pub course_rate: f64,
    /// One rating per entry of the course's `instructor_names`, each in `[0, 5]`.
    pub instructor_rates: Vec<f64>,
    pub workload_per_week: f64,
}

mod reviews {
    use serde::{Deserialize, Deserializer};

    use super::CourseReview;

    // `Many` must come first: a struct with container defaults also accepts
    // an empty sequence.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<CourseReview>),
        One(CourseReview),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<CourseReview>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(OneOrMany::Many(reviews)) => reviews,
            Some(OneOrMany::One(review)) => vec![review],
        })
    }
}
