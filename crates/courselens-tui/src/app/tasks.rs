//! Background session tasks.
//!
//! Results reach the UI through the store's snapshots, so the tasks only
//! log how they ended.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use courselens_plugin::ManifestSource;
use courselens_state::{Action, Session};

/// Start the session in the background.
pub fn spawn_startup(
    session: Arc<Session>,
    manifest: Arc<dyn ManifestSource>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Startup cancelled");
            }
            result = session.start(manifest.as_ref()) => match result {
                Ok(report) => tracing::info!(
                    loaded = report.plugins.len(),
                    failed = report.failures.len(),
                    "Session started"
                ),
                Err(e) => tracing::error!(error = %e, "Session failed to start"),
            },
        }
    });
}

/// Run a button action in the background.
pub fn spawn_action(session: Arc<Session>, action: Action, cancel: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(?action, "Action cancelled");
            }
            result = session.dispatch(action) => {
                if let Err(e) = result {
                    tracing::warn!(?action, error = %e, "Action failed");
                }
            }
        }
    });
}
