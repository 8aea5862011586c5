//! HTTP implementation of [`Backend`].

use futures::future::BoxFuture;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use courselens_core::{ClientConfig, CourseQuery, InstructorQuery};

use crate::backend::Backend;
use crate::error::{TransportError, TransportResult};
use crate::wire::{CoursesResponse, InstructorsResponse, PluginResponse, StartResponse};

/// Analysis server endpoints, relative to the server URL.
pub mod endpoints {
    /// Data plugin discovery.
    pub const START: &str = "start";

    /// Data plugin loading; takes the plugin index as `i`.
    pub const PLUGIN: &str = "plugin";

    /// Course queries.
    pub const COURSES: &str = "courses";

    /// Instructor queries.
    pub const INSTRUCTORS: &str = "instructors";
}

/// Talks to the analysis server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend for the configured server.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let mut base_url =
            Url::parse(&config.server_url).map_err(|e| TransportError::InvalidUrl {
                url: config.server_url.clone(),
                message: e.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl {
                url: config.server_url.clone(),
                message: "URL cannot be used as a base".to_string(),
            });
        }
        // Endpoints are joined relative to the base path.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| TransportError::Request {
                endpoint: base_url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// The server URL endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> TransportResult<T> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| TransportError::InvalidUrl {
                url: format!("{}{endpoint}", self.base_url),
                message: e.to_string(),
            })?;
        tracing::debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| TransportError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

impl Backend for HttpBackend {
    fn start(&self) -> BoxFuture<'_, TransportResult<StartResponse>> {
        Box::pin(async move { self.get_json(endpoints::START, &[]).await })
    }

    fn load_plugin(&self, index: usize) -> BoxFuture<'_, TransportResult<PluginResponse>> {
        Box::pin(async move {
            self.get_json(endpoints::PLUGIN, &[("i", index.to_string())])
                .await
        })
    }

    fn courses<'a>(
        &'a self,
        query: &'a CourseQuery,
    ) -> BoxFuture<'a, TransportResult<CoursesResponse>> {
        Box::pin(async move {
            self.get_json(endpoints::COURSES, &query.to_pairs()).await
        })
    }

    fn instructors<'a>(
        &'a self,
        query: &'a InstructorQuery,
    ) -> BoxFuture<'a, TransportResult<InstructorsResponse>> {
        Box::pin(async move {
            self.get_json(endpoints::INSTRUCTORS, &query.to_pairs())
                .await
        })
    }
}
