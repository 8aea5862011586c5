//! Session orchestration.
//!
//! A [`Session`] ties the store to the analysis server and the
//! visualization plugins. Every failure it encounters is reported on the
//! status line before being returned, so callers only need to log errors.

use std::sync::Arc;

use tokio::sync::Mutex;

use courselens_client::DataPluginClient;
use courselens_core::{CourseQuery, CourseRecord, InstructorQuery, InstructorRecord};
use courselens_plugin::{LoadReport, ManifestSource, VisualizationLoader};

use crate::error::{SessionError, SessionResult};
use crate::state::{AppState, status};
use crate::store::Store;
use crate::view::{Action, ViewModel};

/// One user session against the analysis server.
pub struct Session {
    store: Store,
    client: DataPluginClient,
    loader: VisualizationLoader,
    /// Serializes data plugin loads in request order.
    load_queue: Mutex<()>,
}

impl Session {
    pub fn new(store: Store, client: DataPluginClient, loader: VisualizationLoader) -> Self {
        Self {
            store,
            client,
            loader,
            load_queue: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn client(&self) -> &DataPluginClient {
        &self.client
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.store.snapshot()
    }

    /// The view of the current snapshot.
    pub fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.store.snapshot())
    }

    /// Load the visualization plugins and discover the data plugins.
    ///
    /// Both run concurrently; the session is ready once both have finished.
    /// May be called once per session.
    pub async fn start(&self, manifest: &dyn ManifestSource) -> SessionResult<LoadReport> {
        if let Err(e) = self.store.begin_startup() {
            tracing::warn!(error = %e, "ignoring duplicate startup");
            return Err(e.into());
        }
        tracing::info!(manifest = %manifest.describe(), "starting session");

        let (plugins, discovery) =
            tokio::join!(self.loader.load_all(manifest), self.client.discover());

        let report = match plugins {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "visualization plugins failed to load");
                self.store.fail_startup(&e.to_string());
                return Err(e.into());
            }
        };
        self.store
            .append_visualization_plugins(report.plugins.clone());

        let data_plugins = match discovery {
            Ok(data_plugins) => data_plugins,
            Err(e) => {
                tracing::error!(error = %e, "data plugin discovery failed");
                self.store.fail_startup(&e.transport().to_string());
                return Err(e.into());
            }
        };

        let initial = if report.is_clean() {
            status::INITIAL.to_string()
        } else {
            status::plugins_skipped(report.failures.len())
        };
        self.store.complete_startup(data_plugins, initial);
        tracing::info!(
            visualizations = report.plugins.len(),
            failures = report.failures.len(),
            "session ready"
        );
        Ok(report)
    }

    /// Load the data plugin at `index` of the current list.
    ///
    /// Already-loaded plugins are ignored. Overlapping requests are served
    /// one at a time in request order; a queued request looks its plugin up
    /// again by name, since every load replaces the plugin list.
    ///
    /// Dropping the future before it finishes gives the load up; the store
    /// stops counting it as pending.
    pub async fn choose_data_plugin(&self, index: usize) -> SessionResult<()> {
        let snapshot = self.store.snapshot();
        let Some(plugin) = snapshot.data_plugins.get(index) else {
            let err = SessionError::UnknownDataPlugin {
                index,
                len: snapshot.data_plugins.len(),
            };
            self.store.set_status(err.to_string());
            return Err(err);
        };
        let name = plugin.name.clone();
        if snapshot.is_loaded(&name) {
            tracing::debug!(plugin = %name, "data plugin already loaded");
            return Ok(());
        }

        let pending = PendingLoad::begin(&self.store);
        let _turn = self.load_queue.lock().await;

        let current = self.store.snapshot();
        if current.is_loaded(&name) {
            tracing::debug!(plugin = %name, "data plugin loaded while queued");
            pending.settle(|store| store.skip_load());
            return Ok(());
        }
        let Some(index) = current.data_plugin_index(&name) else {
            pending.settle(|store| store.mark_load_failed(&name, "no longer available"));
            return Err(SessionError::DataPluginVanished { name });
        };

        match self.client.load(index).await {
            Ok(outcome) => {
                pending.settle(|store| {
                    store.apply_load_result(&name, outcome.data_plugins, outcome.analyzed_courses)
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(plugin = %name, error = %e, "data plugin load failed");
                pending.settle(|store| store.mark_load_failed(&name, &e.transport().to_string()));
                Err(e.into())
            }
        }
    }

    /// Make the visualization plugin at `index` the active one.
    pub fn select_visualization(&self, index: usize) -> SessionResult<()> {
        self.store.select_visualization(index).map_err(|e| {
            self.store.set_status(e.to_string());
            e.into()
        })
    }

    /// Perform a button action.
    pub async fn dispatch(&self, action: Action) -> SessionResult<()> {
        match action {
            Action::LoadDataPlugin(index) => self.choose_data_plugin(index).await,
            Action::SelectVisualization(index) => self.select_visualization(index),
        }
    }

    pub async fn courses(&self, query: &CourseQuery) -> SessionResult<Vec<CourseRecord>> {
        Ok(self.client.courses(query).await?)
    }

    pub async fn instructors(&self, query: &InstructorQuery) -> SessionResult<Vec<InstructorRecord>> {
        Ok(self.client.instructors(query).await?)
    }
}

/// A data plugin load counted as pending in the store.
///
/// Must be settled with the load's outcome; dropping it unsettled counts
/// the load as abandoned.
struct PendingLoad<'a> {
    store: &'a Store,
    settled: bool,
}

impl<'a> PendingLoad<'a> {
    fn begin(store: &'a Store) -> Self {
        store.mark_loading();
        Self {
            store,
            settled: false,
        }
    }

    fn settle(mut self, f: impl FnOnce(&Store)) {
        self.settled = true;
        f(self.store);
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("data plugin load abandoned");
            self.store.abandon_load();
        }
    }
}
