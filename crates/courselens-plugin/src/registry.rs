//! Manifest path to plugin factory registry.

use indexmap::IndexMap;

use crate::contract::VisualizationPlugin;
use crate::types::{PluginError, PluginResult};

/// Factory producing a plugin instance for a manifest entry.
pub type PluginFactory =
    Box<dyn Fn() -> PluginResult<Box<dyn VisualizationPlugin>> + Send + Sync>;

/// Module suffixes a manifest entry may carry.
const MODULE_SUFFIXES: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Normalize a manifest path: trims whitespace and a leading `./`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    path.strip_prefix("./").unwrap_or(path)
}

/// The plugin a manifest path names: the normalized path without its module
/// suffix, so `./Workload.tsx` and `Workload` are the same plugin.
pub fn plugin_key(path: &str) -> &str {
    let path = normalize_path(path);
    MODULE_SUFFIXES
        .iter()
        .find_map(|suffix| path.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(path)
}

/// Registry of the plugins a manifest may name.
///
/// Registration order is kept, but it has no effect on load order: the
/// manifest alone decides which plugins load and in what order.
#[derive(Default)]
pub struct PluginRegistry {
    factories: IndexMap<String, PluginFactory>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an infallible factory under a manifest path.
    ///
    /// Registering the same path twice replaces the earlier factory.
    pub fn register<F, P>(&mut self, path: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> P + Send + Sync + 'static,
        P: VisualizationPlugin + 'static,
    {
        self.register_fallible(path, move || {
            Ok(Box::new(factory()) as Box<dyn VisualizationPlugin>)
        })
    }

    /// Register a factory that may fail under a manifest path.
    pub fn register_fallible<F>(&mut self, path: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> PluginResult<Box<dyn VisualizationPlugin>> + Send + Sync + 'static,
    {
        let path = path.into();
        let key = plugin_key(&path).to_string();
        if self.factories.insert(key, Box::new(factory)).is_some() {
            tracing::debug!(path = %path, "replaced visualization plugin factory");
        }
        self
    }

    /// Check if a manifest path has a factory.
    pub fn contains(&self, path: &str) -> bool {
        self.factories.contains_key(plugin_key(path))
    }

    /// Registered manifest paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiate the plugin registered for `path`.
    pub fn resolve(&self, path: &str) -> PluginResult<Box<dyn VisualizationPlugin>> {
        let factory = self
            .factories
            .get(plugin_key(path))
            .ok_or_else(|| PluginError::NotRegistered {
                path: normalize_path(path).to_string(),
            })?;
        factory()
    }
}
