//! Error types for state, session and configuration.

use std::path::PathBuf;

use thiserror::Error;

use courselens_client::ClientError;
use courselens_plugin::PluginError;

use crate::lifecycle::Phase;

/// Result type for store transitions.
pub type StateResult<T> = Result<T, StateError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// A store transition that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Visualization index out of range.
    #[error("No visualization plugin at index {index} ({len} loaded)")]
    InvalidSelection { index: usize, len: usize },

    /// Startup was requested more than once.
    #[error("Session already started (phase: {phase})")]
    AlreadyStarted { phase: Phase },
}

/// Errors surfaced by [`Session`](crate::Session) operations.
///
/// By the time one of these is returned the status line already reports it.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    /// Data plugin index out of range.
    #[error("No data plugin at index {index} ({len} available)")]
    UnknownDataPlugin { index: usize, len: usize },

    /// A queued load targets a plugin the server no longer lists.
    #[error("Data plugin '{name}' is no longer available")]
    DataPluginVanished { name: String },
}

/// Errors loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}
