//! # Services Module
//!
//! External integrations and the adapters that turn them into
//! [`ItemsService`](crate::core::service::ItemsService) implementations.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - reqwest accessors for the backend banking API
//! │                 (friends, cards, transfers) behind per-domain traits
//! ├── cache.rs    - friends cache store (JSON file / null object)
//! └── adapters/   - ItemsService implementations mapping records to rows
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! Screen assembly
//!     │  composes
//!     ▼
//! adapters (FriendsItemsAdapter, CardsItemsAdapter, TransfersItemsAdapter,
//!           CachedFriendsItemsAdapter)
//!     │  call
//!     ▼
//! api accessors / cache store
//!     │  HTTP JSON / JSON file
//!     ▼
//! backend API           local disk
//! ```
//!
//! Adapters never see the list screen; the screen never sees an accessor.

pub mod adapters;
pub mod api;
pub mod cache;
