//! Transport abstraction over the analysis server.

use futures::future::BoxFuture;

use courselens_core::{CourseQuery, InstructorQuery};

use crate::error::TransportResult;
use crate::wire::{CoursesResponse, InstructorsResponse, PluginResponse, StartResponse};

/// The analysis server endpoints.
///
/// Implementations perform exactly one request per call and have no other
/// side effects.
pub trait Backend: Send + Sync {
    /// `GET /start`.
    fn start(&self) -> BoxFuture<'_, TransportResult<StartResponse>>;

    /// `GET /plugin?i=<index>`.
    fn load_plugin(&self, index: usize) -> BoxFuture<'_, TransportResult<PluginResponse>>;

    /// `GET /courses` with the query's filters.
    fn courses<'a>(
        &'a self,
        query: &'a CourseQuery,
    ) -> BoxFuture<'a, TransportResult<CoursesResponse>>;

    /// `GET /instructors` with the query's filters.
    fn instructors<'a>(
        &'a self,
        query: &'a InstructorQuery,
    ) -> BoxFuture<'a, TransportResult<InstructorsResponse>>;
}
