//! Response bodies of the analysis server.
//!
//! The server wraps every answer in the same envelope (`name`, `footer`,
//! `plugins`, `courses`, `instructors`); each type here only requires the
//! fields its endpoint is meant to provide and ignores the rest.

use serde::{Deserialize, Serialize};

use courselens_core::{CourseRecord, DataPluginDescriptor, InstructorRecord};

/// Body of `GET /start`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartResponse {
    pub plugins: Vec<DataPluginDescriptor>,
}

/// Body of `GET /plugin?i=<index>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginResponse {
    /// The complete current data plugin list.
    pub plugins: Vec<DataPluginDescriptor>,

    /// The complete analyzed course set across every loaded plugin.
    #[serde(rename = "analyzedCourses", alias = "courses")]
    pub analyzed_courses: Vec<CourseRecord>,

    /// Name of the analysis, as reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// Body of `GET /courses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoursesResponse {
    pub courses: Vec<CourseRecord>,
}

/// Body of `GET /instructors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorsResponse {
    pub instructors: Vec<InstructorRecord>,
}
