//! Shared fixtures: an in-memory analysis server and plugin registries.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use tokio::sync::Semaphore;

use courselens_client::{
    Backend, CoursesResponse, DataPluginClient, InstructorsResponse, PluginResponse,
    StartResponse, TransportError, TransportResult,
};
use courselens_core::{CourseQuery, CourseRecord, DataPluginDescriptor, InstructorQuery};
use courselens_plugin::{Element, FnPlugin, PluginConfig, PluginRegistry, VisualizationLoader};
use courselens_state::{Session, Store};

#[derive(Default)]
struct Server {
    listed: Vec<String>,
    /// List the server switches to after its first load.
    grown: Option<Vec<String>>,
    loaded: Vec<String>,
    requests: Vec<usize>,
}

impl Server {
    fn descriptors(&self) -> Vec<DataPluginDescriptor> {
        self.listed.iter().map(DataPluginDescriptor::new).collect()
    }

    fn courses(&self) -> Vec<CourseRecord> {
        self.loaded
            .iter()
            .enumerate()
            .map(|(i, name)| CourseRecord::new(i as i64, format!("{name} course")))
            .collect()
    }
}

/// Analysis server stand-in that answers like the real one: loading a plugin
/// twice is a no-op and every answer carries the cumulative state.
#[derive(Default)]
pub struct FakeBackend {
    server: Mutex<Server>,
    failing: HashSet<String>,
    discovery_fails: bool,
    gate: Option<Arc<Semaphore>>,
}

impl FakeBackend {
    pub fn new(plugins: &[&str]) -> Self {
        Self {
            server: Mutex::new(Server {
                listed: plugins.iter().map(|p| p.to_string()).collect(),
                ..Server::default()
            }),
            ..Self::default()
        }
    }

    /// Loading this plugin answers HTTP 500.
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn discovery_fails(mut self) -> Self {
        self.discovery_fails = true;
        self
    }

    /// Loads wait for a permit from `gate`.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// After the first load the server lists `plugins` instead.
    pub fn growing_to(self, plugins: &[&str]) -> Self {
        self.server.lock().unwrap().grown = Some(plugins.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Indexes of every load request received, in order.
    pub fn requests(&self) -> Vec<usize> {
        self.server.lock().unwrap().requests.clone()
    }
}

impl Backend for FakeBackend {
    fn start(&self) -> BoxFuture<'_, TransportResult<StartResponse>> {
        Box::pin(async move {
            if self.discovery_fails {
                return Err(TransportError::Request {
                    endpoint: "start".to_string(),
                    message: "connection refused".to_string(),
                });
            }
            let server = self.server.lock().unwrap();
            Ok(StartResponse {
                plugins: server.descriptors(),
            })
        })
    }

    fn load_plugin(&self, index: usize) -> BoxFuture<'_, TransportResult<PluginResponse>> {
        Box::pin(async move {
            if let Some(gate) = &self.gate {
                gate.acquire().await.unwrap().forget();
            }
            let mut server = self.server.lock().unwrap();
            server.requests.push(index);

            let error = TransportError::Status {
                endpoint: "plugin".to_string(),
                status: 500,
            };
            let Some(name) = server.listed.get(index).cloned() else {
                return Err(error);
            };
            if self.failing.contains(&name) {
                return Err(error);
            }
            if !server.loaded.contains(&name) {
                server.loaded.push(name);
            }
            if let Some(grown) = server.grown.take() {
                server.listed = grown;
            }
            Ok(PluginResponse {
                plugins: server.descriptors(),
                analyzed_courses: server.courses(),
                name: None,
                footer: None,
            })
        })
    }

    fn courses<'a>(
        &'a self,
        query: &'a CourseQuery,
    ) -> BoxFuture<'a, TransportResult<CoursesResponse>> {
        Box::pin(async move {
            let mut courses = self.server.lock().unwrap().courses();
            if let Some(size) = query.size {
                courses.truncate(size);
            }
            Ok(CoursesResponse { courses })
        })
    }

    fn instructors<'a>(
        &'a self,
        _query: &'a InstructorQuery,
    ) -> BoxFuture<'a, TransportResult<InstructorsResponse>> {
        Box::pin(async move { Ok(InstructorsResponse::default()) })
    }
}

/// Registry of plugins that render an empty element titled by their name.
pub fn registry(entries: &[(&'static str, &'static str)]) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    for &(path, name) in entries {
        registry.register(path, move || FnPlugin::new(name, move || Element::empty(name)));
    }
    registry
}

pub fn session_with(
    backend: Arc<FakeBackend>,
    registry: PluginRegistry,
    config: PluginConfig,
) -> Session {
    Session::new(
        Store::new(),
        DataPluginClient::new(backend),
        VisualizationLoader::new(registry, config),
    )
}

pub fn session(backend: Arc<FakeBackend>) -> Session {
    session_with(
        backend,
        registry(&[("a.js", "A"), ("b.js", "B")]),
        PluginConfig::default(),
    )
}
