//! Visualization plugin manifests.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::registry::normalize_path;
use crate::types::{PluginError, PluginResult};

/// Type alias for boxed futures returned by async manifest sources.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Parsed manifest: the ordered module paths to load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Parse manifest text.
    ///
    /// One path per line. Blank lines and lines starting with `#` are
    /// skipped; surrounding whitespace, `\r` and a leading `./` are removed.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(normalize_path)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Entries in manifest order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Something that can provide manifest text.
pub trait ManifestSource: Send + Sync {
    /// Human-readable description for logs and errors.
    fn describe(&self) -> String;

    /// Read the manifest text.
    fn read(&self) -> BoxFuture<'_, PluginResult<String>>;
}

/// A manifest stored in a file.
#[derive(Debug, Clone)]
pub struct FileManifest {
    path: PathBuf,
}

impl FileManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifest {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> BoxFuture<'_, PluginResult<String>> {
        Box::pin(async move {
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| PluginError::ManifestUnavailable {
                    manifest: self.describe(),
                    message: e.to_string(),
                })
        })
    }
}

/// A manifest held in memory, such as one compiled into the binary.
#[derive(Debug, Clone)]
pub struct InlineManifest {
    name: String,
    text: String,
}

impl InlineManifest {
    pub fn new(text: impl Into<String>) -> Self {
        Self::named("<inline>", text)
    }

    pub fn named(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl ManifestSource for InlineManifest {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> BoxFuture<'_, PluginResult<String>> {
        Box::pin(async move { Ok(self.text.clone()) })
    }
}
