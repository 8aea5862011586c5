//! Terminal user interface for courselens.
//!
//! This crate draws a [`Session`] with ratatui: the instructions, the status
//! line, the active visualization, and one button column each for data and
//! visualization plugins. It also ships the built-in visualization plugins.
//!
//! # Usage
//!
//! ```rust,no_run
//! use courselens_state::AppConfig;
//!
//! courselens_tui::run(AppConfig::default()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `Tab`/`h`/`l` - Switch between the data and visualization columns
//! - `j`/`k` - Move down/up
//! - `Enter` - Load the data plugin or show the visualization
//! - `1`-`9` - Activate the n-th button of the focused column
//! - `t` - Toggle theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod theme;
mod ui;
pub mod visualizers;

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::WrapErr;

use courselens_client::DataPluginClient;
use courselens_plugin::{FileManifest, InlineManifest, ManifestSource, VisualizationLoader};
use courselens_state::{AppConfig, Session, Store};

pub use app::{App, AppResult};
pub use theme::Theme;

/// Build a session wired to the configured server and plugins.
///
/// Returns the session together with the manifest to start it with.
pub fn build_session(config: &AppConfig) -> AppResult<(Arc<Session>, Arc<dyn ManifestSource>)> {
    let store = Store::new();
    let client = DataPluginClient::http(&config.client)
        .wrap_err_with(|| format!("Invalid server URL {}", config.client.server_url))?;
    let loader = VisualizationLoader::new(
        visualizers::builtin_registry(&store),
        config.plugins.clone(),
    );

    let manifest: Arc<dyn ManifestSource> = match &config.plugins.manifest {
        Some(path) => Arc::new(FileManifest::new(path)),
        None => Arc::new(InlineManifest::named(
            "built-in manifest",
            visualizers::DEFAULT_MANIFEST,
        )),
    };

    Ok((Arc::new(Session::new(store, client, loader)), manifest))
}

/// Run the TUI application.
pub fn run(config: AppConfig) -> AppResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (session, manifest) = build_session(&config)?;

    let terminal = ratatui::init();
    let result = rt.block_on(App::new(session, manifest).run(terminal));
    ratatui::restore();

    // Don't wait on a data plugin that is still loading.
    rt.shutdown_timeout(Duration::from_millis(100));

    result
}
