//! Visualization plugin system for courselens.
//!
//! Visualization plugins are client-side renderers. They are discovered once
//! at startup from a *manifest*: a text file listing one module path per
//! line. Each path is resolved through a typed [`PluginRegistry`] that maps
//! manifest paths to factories, so no code is located by string-built
//! imports at runtime.
//!
//! # Architecture
//!
//! - [`VisualizationPlugin`] is the capability every plugin implements.
//! - [`PluginRegistry`] maps manifest paths to plugin factories.
//! - [`ManifestSource`] provides the manifest text (file or inline).
//! - [`VisualizationLoader`] resolves the manifest entries in order,
//!   validates each plugin, and produces [`VisualizationDescriptor`]s.
//!
//! # Example
//!
//! ```ignore
//! use courselens_plugin::{InlineManifest, PluginConfig, PluginRegistry, VisualizationLoader};
//!
//! let mut registry = PluginRegistry::new();
//! registry.register("WorkloadVisualizer", || WorkloadVisualizer::new(snapshots.clone()));
//!
//! let loader = VisualizationLoader::new(registry, PluginConfig::default());
//! let report = loader.load_all(&InlineManifest::new("WorkloadVisualizer\n")).await?;
//! ```

mod config;
mod contract;
mod element;
mod loader;
mod manifest;
mod registry;
mod types;

pub use config::{LoadPolicy, PluginConfig};
pub use contract::{FnPlugin, Renderer, VisualizationDescriptor, VisualizationPlugin};
pub use element::{Bar, Element, ElementBody, Table};
pub use loader::{LoadReport, VisualizationLoader};
pub use manifest::{BoxFuture, FileManifest, InlineManifest, Manifest, ManifestSource};
pub use registry::{PluginFactory, PluginRegistry, normalize_path, plugin_key};
pub use types::{PluginError, PluginResult};
