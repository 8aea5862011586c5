//! Instructor records produced by the analysis backend.

use serde::{Deserialize, Serialize};

/// Aggregated view of one instructor across all analyzed courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorRecord {
    pub name: String,
    pub course_num: u32,
    pub course_names: Vec<String>,
    pub organization_num: u32,
    pub organization_names: Vec<String>,
    pub total_students: i64,
    /// Average rating weighted by the number of rated reviews.
    pub rate: f64,
}

impl InstructorRecord {
    /// Create an instructor with no courses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
