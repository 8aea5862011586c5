//! Error types for the plugin system.

use thiserror::Error;

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

/// Errors that can occur while loading visualization plugins.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The manifest could not be read.
    #[error("Manifest '{manifest}' is unavailable: {message}")]
    ManifestUnavailable { manifest: String, message: String },

    /// A manifest entry has no registered factory.
    #[error("No visualization plugin registered for '{path}'")]
    NotRegistered { path: String },

    /// The factory for a manifest entry failed.
    #[error("Failed to load plugin '{path}': {message}")]
    LoadError { path: String, message: String },

    /// The plugin does not satisfy the visualization capability contract.
    #[error("Plugin '{path}' violates the visualization contract: {reason}")]
    Contract { path: String, reason: String },
}

impl PluginError {
    /// The manifest path of the offending entry, if the error concerns one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::ManifestUnavailable { .. } => None,
            Self::NotRegistered { path }
            | Self::LoadError { path, .. }
            | Self::Contract { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_path() {
        let err = PluginError::NotRegistered {
            path: "a.js".to_string(),
        };
        assert_eq!(err.path(), Some("a.js"));
        assert!(err.to_string().contains("a.js"));

        let err = PluginError::ManifestUnavailable {
            manifest: "plugins.txt".to_string(),
            message: "missing".to_string(),
        };
        assert_eq!(err.path(), None);
    }
}
