//! # Items Service Trait
//!
//! The core abstraction of the data-loading layer: one operation that
//! asynchronously produces the display-ready rows for a list screen, or
//! fails with a [`ServiceError`].
//!
//! Everything else in the pipeline is either an implementation of this trait
//! (source adapters, the cache-backed adapter) or a decorator around it
//! (retry, fallback). Screens only ever hold one opaque
//! `Arc<dyn ItemsService>`; the composition behind it is invisible to them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::ServiceError;
use crate::core::item::ItemViewModel;

/// Outcome of a single load attempt. Produced exactly once per invocation,
/// never partially populated.
pub type LoadResult = Result<Vec<ItemViewModel>, ServiceError>;

/// Callback invoked when a row built from domain record `T` is activated.
///
/// Supplied by the screen-assembly layer; adapters close each row's
/// activation over exactly one record and forward it here.
pub type SelectionHandler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Asynchronously load an ordered list of display-ready items.
///
/// Implementations hold only their wrapped dependencies (another service, a
/// cache handle, an accessor plus a selection callback) and no mutable state,
/// so a single instance is safe to re-invoke concurrently. Decorators rely on
/// that to re-issue calls against the same wrapped instance.
///
/// All failures surface as `Err`; implementations never panic on the load
/// path.
#[async_trait]
pub trait ItemsService: Send + Sync {
    async fn load_items(&self) -> LoadResult;
}
