//! # Retry Decorator
//!
//! Retry is not a second mechanism: it is a right-fold of the fallback
//! primitive over the service itself. `retrying(2)` builds
//! `self.falling_back_to(self).falling_back_to(self)`, which attempts the
//! wrapped service up to three times, strictly one after another. No counter
//! state lives inside the decorator; the structure of the composition is the
//! counter.

use std::sync::Arc;

use crate::core::fallback::FallbackItemsService;
use crate::core::service::ItemsService;

pub trait RetryItemsService {
    /// Re-invoke the wrapped service on failure, up to `retry_count` extra
    /// times. The first success at any attempt wins; if every attempt fails,
    /// the last failure is the one surfaced. `retry_count = 0` is the
    /// identity: exactly one attempt, no retry.
    fn retrying(self, retry_count: usize) -> Arc<dyn ItemsService>;
}

impl RetryItemsService for Arc<dyn ItemsService> {
    fn retrying(self, retry_count: usize) -> Arc<dyn ItemsService> {
        let original = Arc::clone(&self);
        (0..retry_count).fold(self, |service, _| {
            service.falling_back_to(Arc::clone(&original))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use crate::core::error::ServiceError;
    use crate::core::item::ItemViewModel;
    use crate::core::service::LoadResult;

    /// Fails the first `failures` calls with a tagged error, then succeeds.
    struct FlakyService {
        failures: usize,
        calls: AtomicUsize,
    }

    impl FlakyService {
        fn new(failures: usize) -> Arc<Self> {
            Arc::new(Self {
                failures,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ItemsService for FlakyService {
        async fn load_items(&self) -> LoadResult {
            let attempt = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt <= self.failures {
                Err(ServiceError::Network(format!("attempt {attempt}")))
            } else {
                Ok(vec![ItemViewModel::new("loaded", "", Arc::new(|| {}))])
            }
        }
    }

    /// Pops one scripted outcome per call.
    struct ScriptedService {
        outcomes: Mutex<VecDeque<LoadResult>>,
        calls: AtomicUsize,
    }

    impl ScriptedService {
        fn new(outcomes: Vec<LoadResult>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ItemsService for ScriptedService {
        async fn load_items(&self) -> LoadResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ServiceError::Unknown("script exhausted".to_string())))
        }
    }

    #[tokio::test]
    async fn test_first_success_wins_after_k_failures() {
        // K = 2 failures, N = 3 retries allowed: success on the third call.
        let flaky = FlakyService::new(2);
        let service: Arc<dyn ItemsService> = flaky.clone();

        let outcome = service.retrying(3).load_items().await;
        assert!(outcome.is_ok());
        assert_eq!(flaky.calls(), 3);
    }

    #[tokio::test]
    async fn test_success_on_first_attempt_issues_single_call() {
        let flaky = FlakyService::new(0);
        let service: Arc<dyn ItemsService> = flaky.clone();

        let outcome = service.retrying(2).load_items().await;
        assert!(outcome.is_ok());
        assert_eq!(flaky.calls(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_issues_n_plus_one_calls_and_surfaces_last_error() {
        let scripted = ScriptedService::new(vec![
            Err(ServiceError::Network("attempt 1".to_string())),
            Err(ServiceError::Network("attempt 2".to_string())),
            Err(ServiceError::Network("attempt 3".to_string())),
        ]);
        let service: Arc<dyn ItemsService> = scripted.clone();

        let outcome = service.retrying(2).load_items().await;
        assert_eq!(outcome, Err(ServiceError::Network("attempt 3".to_string())));
        assert_eq!(scripted.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_retries_is_one_attempt() {
        let scripted = ScriptedService::new(vec![Err(ServiceError::Network("only".to_string()))]);
        let service: Arc<dyn ItemsService> = scripted.clone();

        let outcome = service.retrying(0).load_items().await;
        assert_eq!(outcome, Err(ServiceError::Network("only".to_string())));
        assert_eq!(scripted.calls.load(Ordering::SeqCst), 1);
    }
}
