//! # Event Handler
//!
//! Handles async event results from background load tasks, updating
//! application state accordingly. Runs on the main thread; the write lock is
//! taken per event and released immediately.

use crate::app::events::{AppEvent, DetailRoute};
use crate::app::state::Screen;
use crate::app::App;
use crate::core::service::LoadResult;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ItemsLoaded { screen, outcome } => {
                self.handle_items_loaded(screen, outcome);
            }
            AppEvent::ShowDetail(route) => {
                self.handle_show_detail(route);
            }
        }
    }
}

impl App {
    fn handle_items_loaded(&mut self, screen: Screen, outcome: LoadResult) {
        tracing::debug!(
            screen = screen.title(),
            success = outcome.is_ok(),
            "Processing load outcome"
        );

        let mut state = self.state.write();
        state.list_mut(screen).apply_outcome(outcome);
    }

    fn handle_show_detail(&mut self, route: DetailRoute) {
        let mut state = self.state.write();
        state.detail = Some(route);
    }
}
