//! Data plugin descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A server-side data source the user may choose to load.
///
/// The server is authoritative: a fresh list of descriptors arrives with
/// every load response, and plugins are addressed by their position in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPluginDescriptor {
    pub name: String,
}

impl DataPluginDescriptor {
    /// Create a descriptor for the named plugin.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for DataPluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
