//! # Fallback Decorator
//!
//! The single composition primitive of the loading pipeline: try a primary
//! service, and only if it fails, try a secondary one. Retry is built on top
//! of this (see [`crate::core::retry`]), so the two recovery mechanisms share
//! one implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::service::{ItemsService, LoadResult};

/// Wraps two services; the secondary runs only after the primary has failed.
///
/// - Primary success is returned unchanged; the secondary is never invoked.
/// - On primary failure, the secondary's outcome is returned unchanged,
///   success or failure. The primary's error is discarded.
/// - Invocations are strictly sequential; at most one underlying call is in
///   flight at any time.
pub struct ItemsServiceWithFallback {
    primary: Arc<dyn ItemsService>,
    fallback: Arc<dyn ItemsService>,
}

impl ItemsServiceWithFallback {
    pub fn new(primary: Arc<dyn ItemsService>, fallback: Arc<dyn ItemsService>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl ItemsService for ItemsServiceWithFallback {
    async fn load_items(&self) -> LoadResult {
        match self.primary.load_items().await {
            Ok(items) => Ok(items),
            Err(error) => {
                tracing::debug!(%error, "primary load failed, invoking fallback");
                self.fallback.load_items().await
            }
        }
    }
}

/// Composition sugar so stacks read left-to-right at the assembly site.
pub trait FallbackItemsService {
    /// Wrap `self` so that `secondary` handles any failure of `self`.
    fn falling_back_to(self, secondary: Arc<dyn ItemsService>) -> Arc<dyn ItemsService>;
}

impl FallbackItemsService for Arc<dyn ItemsService> {
    fn falling_back_to(self, secondary: Arc<dyn ItemsService>) -> Arc<dyn ItemsService> {
        Arc::new(ItemsServiceWithFallback::new(self, secondary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use crate::core::error::ServiceError;
    use crate::core::item::ItemViewModel;

    /// Scripted fake: pops one outcome per call and counts invocations.
    struct StubService {
        outcomes: Mutex<VecDeque<LoadResult>>,
        calls: AtomicUsize,
    }

    impl StubService {
        fn new(outcomes: Vec<LoadResult>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ItemsService for StubService {
        async fn load_items(&self) -> LoadResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ServiceError::Unknown("script exhausted".to_string())))
        }
    }

    fn items(labels: &[&str]) -> Vec<ItemViewModel> {
        labels
            .iter()
            .map(|label| ItemViewModel::new(*label, "", Arc::new(|| {})))
            .collect()
    }

    #[tokio::test]
    async fn test_primary_success_never_invokes_secondary() {
        let primary = StubService::new(vec![Ok(items(&["a", "b"]))]);
        let secondary = StubService::new(vec![Ok(items(&["cached"]))]);

        let primary_service: Arc<dyn ItemsService> = primary.clone();
        let composed = primary_service.falling_back_to(secondary.clone());

        let outcome = composed.load_items().await;
        assert_eq!(outcome, Ok(items(&["a", "b"])));
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_returns_secondary_success() {
        let primary = StubService::new(vec![Err(ServiceError::Network("down".to_string()))]);
        let secondary = StubService::new(vec![Ok(items(&["cached"]))]);

        let primary_service: Arc<dyn ItemsService> = primary.clone();
        let composed = primary_service.falling_back_to(secondary.clone());

        let outcome = composed.load_items().await;
        assert_eq!(outcome, Ok(items(&["cached"])));
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_both_failing_surfaces_secondary_error_not_primary() {
        let primary = StubService::new(vec![Err(ServiceError::Network("primary".to_string()))]);
        let secondary = StubService::new(vec![Err(ServiceError::CacheMiss)]);

        let primary_service: Arc<dyn ItemsService> = primary.clone();
        let composed = primary_service.falling_back_to(secondary.clone());

        let outcome = composed.load_items().await;
        assert_eq!(outcome, Err(ServiceError::CacheMiss));
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }
}
