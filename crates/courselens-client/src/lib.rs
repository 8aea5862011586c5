//! Analysis backend client for courselens.
//!
//! The analysis server owns the data plugins. This crate talks to it over
//! four read-only endpoints:
//!
//! | Endpoint | Purpose |
//! |----------|---------|
//! | `GET /start` | Discover the data plugins |
//! | `GET /plugin?i=<index>` | Load a data plugin, returning the cumulative analysis |
//! | `GET /courses` | Query analyzed courses |
//! | `GET /instructors` | Query analyzed instructors |
//!
//! [`Backend`] abstracts the transport; [`HttpBackend`] is the HTTP
//! implementation and [`DataPluginClient`] is what the rest of the
//! application uses.

mod backend;
mod client;
mod error;
mod http;
mod wire;

pub use backend::Backend;
pub use client::{DataPluginClient, LoadOutcome};
pub use error::{ClientError, ClientResult, TransportError, TransportResult};
pub use http::{HttpBackend, endpoints};
pub use wire::{CoursesResponse, InstructorsResponse, PluginResponse, StartResponse};
