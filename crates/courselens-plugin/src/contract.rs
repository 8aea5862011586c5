//! The visualization plugin capability.

use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::types::{PluginError, PluginResult};

/// Capability every visualization plugin must implement.
///
/// A plugin has a display name (used as its button label) and a renderer
/// that produces an [`Element`] on demand. Rendering must be side-effect free;
/// it may be called on every redraw.
pub trait VisualizationPlugin: Send + Sync {
    /// The plugin's display name.
    fn name(&self) -> &str;

    /// Produce the element to display.
    fn render(&self) -> Element;
}

/// Zero-argument renderer stored in a descriptor.
pub type Renderer = Arc<dyn Fn() -> Element + Send + Sync>;

/// A loaded, validated visualization plugin.
#[derive(Clone)]
pub struct VisualizationDescriptor {
    name: String,
    renderer: Renderer,
}

impl VisualizationDescriptor {
    /// Create a descriptor directly from a name and a renderer.
    pub fn new<F>(name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn() -> Element + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            renderer: Arc::new(renderer),
        }
    }

    /// Validate a plugin resolved for `path` and wrap it in a descriptor.
    pub fn from_plugin(path: &str, plugin: Box<dyn VisualizationPlugin>) -> PluginResult<Self> {
        let name = plugin.name().trim().to_string();
        if name.is_empty() {
            return Err(PluginError::Contract {
                path: path.to_string(),
                reason: "plugin name is empty".to_string(),
            });
        }
        if name.chars().any(char::is_control) {
            return Err(PluginError::Contract {
                path: path.to_string(),
                reason: format!("plugin name {name:?} contains control characters"),
            });
        }

        let plugin: Arc<dyn VisualizationPlugin> = Arc::from(plugin);
        Ok(Self {
            name,
            renderer: Arc::new(move || plugin.render()),
        })
    }

    /// The plugin's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the renderer.
    pub fn render(&self) -> Element {
        (self.renderer)()
    }

    /// A shared handle to the renderer.
    pub fn renderer(&self) -> Renderer {
        Arc::clone(&self.renderer)
    }
}

impl fmt::Debug for VisualizationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualizationDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A plugin built from a name and a rendering closure.
pub struct FnPlugin<F> {
    name: String,
    render: F,
}

impl<F> FnPlugin<F>
where
    F: Fn() -> Element + Send + Sync,
{
    pub fn new(name: impl Into<String>, render: F) -> Self {
        Self {
            name: name.into(),
            render,
        }
    }
}

impl<F> VisualizationPlugin for FnPlugin<F>
where
    F: Fn() -> Element + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Element {
        (self.render)()
    }
}
