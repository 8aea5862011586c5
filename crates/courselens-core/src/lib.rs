//! Core types for courselens.
//!
//! This crate holds the vocabulary shared by the data plugin client, the
//! visualization plugins and the application state: course and instructor
//! records as the analysis backend reports them, data plugin descriptors,
//! query filters, and client configuration.

mod config;
mod course;
mod instructor;
mod plugin;
mod query;

pub use config::{ClientConfig, ClientConfigBuilder, ClientConfigBuilderError};
pub use course::{CourseRecord, CourseReview, UNKNOWN_METRIC};
pub use instructor::InstructorRecord;
pub use plugin::DataPluginDescriptor;
pub use query::{
    CourseQuery, CourseQueryBuilder, CourseQueryBuilderError, InstructorQuery,
    InstructorQueryBuilder, InstructorQueryBuilderError,
};
