//! Application state for courselens.
//!
//! A [`Store`] owns the single [`AppState`] and publishes immutable
//! snapshots of it; every mutation is one transition observed atomically by
//! subscribers. [`ViewModel::from_state`] turns a snapshot into everything a
//! front end needs to draw, and [`Session`] orchestrates startup and user
//! actions against the analysis server and the visualization plugins.

mod config;
mod error;
mod lifecycle;
mod session;
mod state;
mod store;
mod view;

pub use config::AppConfig;
pub use error::{ConfigError, SessionError, SessionResult, StateError, StateResult};
pub use lifecycle::Phase;
pub use session::Session;
pub use state::{AppState, status};
pub use store::Store;
pub use view::{
    Action, Button, ButtonColumn, INSTRUCTIONS, NO_PLUGIN_LOADED, NOTES, TITLE, ViewModel,
};
