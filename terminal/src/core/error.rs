//! # Common Error Types
//!
//! Consolidated error handling for the item-loading pipeline.
//!
//! This module provides a centralized error type [`ServiceError`] shared by
//! every [`crate::core::service::ItemsService`] implementation.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Network**: remote accessor failures (connection, HTTP status, JSON parsing)
//! - **CacheMiss**: the local cache store has never been populated
//! - **Cache**: the cache store exists but could not be read or written
//! - **Unknown**: anything that does not fit the categories above
//!
//! ## Propagation Policy
//!
//! - Source adapters never swallow: the accessor's error propagates verbatim.
//! - The retry decorator surfaces only the final attempt's error.
//! - The fallback decorator discards the primary's error once a secondary ran.
//! - Cache-save failures on the friends side-effect path are logged and
//!   suppressed; they never turn a successful load into a failure.

use thiserror::Error;

/// Error type for all item-loading services.
///
/// Derives `Clone` and `PartialEq` so load outcomes can travel through the
/// app event channel and tests can assert exactly which attempt's error
/// surfaced after a decorated load exhausts its attempts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Remote accessor failure (connection, HTTP status, response decoding).
    #[error("network error: {0}")]
    Network(String),

    /// The cache store has no persisted list to serve.
    #[error("cache is empty")]
    CacheMiss,

    /// The cache store failed to read or write.
    #[error("cache error: {0}")]
    Cache(String),

    /// Uncategorized failure.
    #[error("unknown error: {0}")]
    Unknown(String),
}
