//! Plugin loading configuration.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::registry::{normalize_path, plugin_key};

/// What to do when a manifest entry fails to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Record the failure and continue with the next entry.
    #[default]
    Skip,

    /// Stop at the first failure; nothing is loaded.
    Abort,
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Visualization plugin loading configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Manifest file to load instead of the built-in manifest.
    pub manifest: Option<PathBuf>,

    /// Failure policy for manifest entries.
    pub policy: LoadPolicy,

    /// Manifest paths that are never loaded.
    pub disabled_plugins: HashSet<String>,
}

impl PluginConfig {
    /// Use a manifest file.
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Set the failure policy.
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Disable a specific manifest entry.
    pub fn disable_plugin(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.disabled_plugins.insert(normalize_path(&path).to_string());
        self
    }

    /// Check if a manifest entry is disabled.
    pub fn is_disabled(&self, path: &str) -> bool {
        let key = plugin_key(path);
        self.disabled_plugins
            .iter()
            .any(|disabled| plugin_key(disabled) == key)
    }
}
