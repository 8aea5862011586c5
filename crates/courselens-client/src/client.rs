//! Data plugin client.

use std::sync::Arc;

use courselens_core::{
    ClientConfig, CourseQuery, CourseRecord, DataPluginDescriptor, InstructorQuery,
    InstructorRecord,
};

use crate::backend::Backend;
use crate::error::{ClientError, ClientResult, TransportResult};
use crate::http::HttpBackend;

/// Result of loading a data plugin.
///
/// Both lists replace, never merge with, what the caller held before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub data_plugins: Vec<DataPluginDescriptor>,
    pub analyzed_courses: Vec<CourseRecord>,
}

/// Discovers and loads data plugins on the analysis server.
#[derive(Clone)]
pub struct DataPluginClient {
    backend: Arc<dyn Backend>,
}

impl std::fmt::Debug for DataPluginClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataPluginClient").finish_non_exhaustive()
    }
}

impl DataPluginClient {
    /// Create a client over an arbitrary backend.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Create a client talking HTTP to the configured server.
    pub fn http(config: &ClientConfig) -> TransportResult<Self> {
        Ok(Self::new(Arc::new(HttpBackend::new(config)?)))
    }

    /// Fetch the list of available data plugins.
    pub async fn discover(&self) -> ClientResult<Vec<DataPluginDescriptor>> {
        let response = self
            .backend
            .start()
            .await
            .map_err(|source| ClientError::DiscoveryFailed { source })?;
        tracing::info!(count = response.plugins.len(), "Discovered data plugins");
        Ok(response.plugins)
    }

    /// Ask the server to load the data plugin at `index`.
    ///
    /// The server ignores requests for plugins it has already loaded and
    /// still answers with its current state.
    pub async fn load(&self, index: usize) -> ClientResult<LoadOutcome> {
        tracing::info!(index, "Loading data plugin");
        let response = self
            .backend
            .load_plugin(index)
            .await
            .map_err(|source| ClientError::LoadFailed { index, source })?;
        tracing::info!(
            index,
            plugins = response.plugins.len(),
            courses = response.analyzed_courses.len(),
            "Data plugin loaded"
        );
        Ok(LoadOutcome {
            data_plugins: response.plugins,
            analyzed_courses: response.analyzed_courses,
        })
    }

    /// Query analyzed courses.
    pub async fn courses(&self, query: &CourseQuery) -> ClientResult<Vec<CourseRecord>> {
        self.backend
            .courses(query)
            .await
            .map(|r| r.courses)
            .map_err(|source| ClientError::QueryFailed { source })
    }

    /// Query analyzed instructors.
    pub async fn instructors(&self, query: &InstructorQuery) -> ClientResult<Vec<InstructorRecord>> {
        self.backend
            .instructors(query)
            .await
            .map(|r| r.instructors)
            .map_err(|source| ClientError::QueryFailed { source })
    }
}
