//! Filters for the course and instructor query endpoints.
//!
//! Every filter is optional; unset filters are not sent, leaving the backend
//! to apply its own defaults. Keyword filters are substring matches on the
//! server side.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Filter for `GET /courses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option), build_fn(validate = "Self::validate"))]
pub struct CourseQuery {
    /// Keyword contained in the course name.
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    /// Keyword contained in any instructor name.
    pub instructor: Option<String>,
    pub organization: Option<String>,
    /// Exact year.
    pub year: Option<i32>,
    /// Maximum number of courses returned.
    pub size: Option<usize>,
}

impl CourseQueryBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.size {
            return Err("Result size must be at least 1".to_string());
        }
        if let Some(Some(year)) = self.year {
            if year <= 0 {
                return Err(format!("Invalid year: {year}"));
            }
        }
        Ok(())
    }
}

impl CourseQuery {
    /// Create a new course query builder.
    pub fn builder() -> CourseQueryBuilder {
        CourseQueryBuilder::default()
    }

    /// Query string pairs for the set filters, in endpoint order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name", &self.name);
        push_text(&mut pairs, "category", &self.category);
        push_text(&mut pairs, "level", &self.level);
        push_text(&mut pairs, "instructor", &self.instructor);
        push_text(&mut pairs, "organization", &self.organization);
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

/// Filter for `GET /instructors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option), build_fn(validate = "Self::validate"))]
pub struct InstructorQuery {
    /// Keyword contained in the instructor name.
    pub name: Option<String>,
    /// Keyword contained in any course the instructor teaches.
    pub course: Option<String>,
    pub organization: Option<String>,
    /// Maximum number of instructors returned.
    pub size: Option<usize>,
}

impl InstructorQueryBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.size {
            return Err("Result size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl InstructorQuery {
    /// Create a new instructor query builder.
    pub fn builder() -> InstructorQueryBuilder {
        InstructorQueryBuilder::default()
    }

    /// Query string pairs for the set filters, in endpoint order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "name", &self.name);
        push_text(&mut pairs, "course", &self.course);
        push_text(&mut pairs, "organization", &self.organization);
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    // An empty keyword matches everything, same as leaving it out.
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}
