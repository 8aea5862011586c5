//! Manifest-driven visualization plugin loader.

use std::collections::HashSet;

use crate::config::{LoadPolicy, PluginConfig};
use crate::contract::VisualizationDescriptor;
use crate::manifest::{Manifest, ManifestSource};
use crate::registry::{PluginRegistry, plugin_key};
use crate::types::{PluginError, PluginResult};

/// Outcome of loading a manifest.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Loaded plugins in manifest order.
    pub plugins: Vec<VisualizationDescriptor>,

    /// Entries that failed (only populated under [`LoadPolicy::Skip`]).
    pub failures: Vec<PluginError>,

    /// Entries skipped because they were disabled or repeated.
    pub skipped: Vec<String>,
}

impl LoadReport {
    /// Check if every entry either loaded or was deliberately skipped.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads visualization plugins listed in a manifest.
pub struct VisualizationLoader {
    registry: PluginRegistry,
    config: PluginConfig,
}

impl VisualizationLoader {
    /// Create a loader resolving entries through `registry`.
    pub fn new(registry: PluginRegistry, config: PluginConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Read the manifest and load every entry, sequentially and in order.
    ///
    /// Each entry is imported at most once. Under [`LoadPolicy::Abort`] the
    /// first failing entry fails the whole load.
    pub async fn load_all(&self, source: &dyn ManifestSource) -> PluginResult<LoadReport> {
        let text = source.read().await?;
        let manifest = Manifest::parse(&text);
        tracing::info!(
            manifest = %source.describe(),
            entries = manifest.len(),
            policy = %self.config.policy,
            "loading visualization plugins"
        );

        let mut report = LoadReport::default();
        let mut seen = HashSet::new();

        for path in manifest.entries() {
            if !seen.insert(plugin_key(path)) {
                tracing::warn!(path = %path, "manifest lists plugin more than once, skipping");
                report.skipped.push(path.clone());
                continue;
            }
            if self.config.is_disabled(path) {
                tracing::info!(path = %path, "visualization plugin disabled");
                report.skipped.push(path.clone());
                continue;
            }

            match self.import(path) {
                Ok(descriptor) => {
                    tracing::debug!(path = %path, name = descriptor.name(), "loaded visualization plugin");
                    report.plugins.push(descriptor);
                }
                Err(e) => match self.config.policy {
                    LoadPolicy::Abort => {
                        tracing::error!(path = %path, error = %e, "aborting plugin load");
                        return Err(e);
                    }
                    LoadPolicy::Skip => {
                        tracing::warn!(path = %path, error = %e, "skipping visualization plugin");
                        report.failures.push(e);
                    }
                },
            }

            // Let concurrent startup work make progress between imports.
            tokio::task::yield_now().await;
        }

        Ok(report)
    }

    fn import(&self, path: &str) -> PluginResult<VisualizationDescriptor> {
        let plugin = self.registry.resolve(path)?;
        VisualizationDescriptor::from_plugin(path, plugin)
    }
}
