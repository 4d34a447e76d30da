//! # Load Tasks
//!
//! Spawns item loads onto the global runtime and marshals their outcomes
//! back to the main thread via the app event channel.

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::app::state::Screen;
use crate::core::service::ItemsService;
use crate::utils::runtime::TOKIO_RT;

/// Run one load for `screen` in the background.
///
/// The composed service is opaque here: retries and fallbacks have already
/// happened by the time the outcome comes back. Exactly one event is sent
/// per invocation.
pub(crate) fn load_items(
    screen: Screen,
    service: Arc<dyn ItemsService>,
    event_tx: Sender<AppEvent>,
) {
    TOKIO_RT.spawn(async move {
        let outcome = service.load_items().await;

        match &outcome {
            Ok(items) => {
                tracing::info!(screen = screen.title(), count = items.len(), "Items loaded");
            }
            Err(error) => {
                tracing::warn!(screen = screen.title(), %error, "Items load failed");
            }
        }

        // The receiver may be gone (app torn down mid-flight); a completion
        // with nobody listening is a no-op, not an error.
        if event_tx
            .send(AppEvent::ItemsLoaded { screen, outcome })
            .await
            .is_err()
        {
            tracing::debug!(screen = screen.title(), "Load outcome dropped, receiver gone");
        }
    });
}
