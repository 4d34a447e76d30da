//! # Ledger Terminal - Library Root
//!
//! The data-loading and presentation layer of a mobile-banking style
//! terminal: four list screens (Friends, Cards, Sent and Received Transfers)
//! backed by pluggable, resilient item-loading services.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - orchestrator, screen state machines,     │
//! │               per-screen service assembly              │
//! │  core       - ItemsService + fallback/retry decorators │
//! │  services   - API accessors, cache store, adapters     │
//! │  utils      - row formatting, global tokio runtime     │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (reqwest)               │ JSON file
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Banking API    │          │   Friends cache         │
//! │  (external)     │          │   (local disk)          │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### One service trait, one composition primitive
//!
//! Every screen holds a single opaque [`core::ItemsService`]. Resilience is
//! not screen logic: the assembly layer stacks the fallback decorator (and
//! retry, which is folded fallback) around a source adapter, and the screen
//! cannot tell a bare adapter from a three-deep composition.
//!
//! ### Event-driven completion delivery
//!
//! Loads run on a global tokio runtime; outcomes are marshaled back to the
//! single consumer thread over an unbounded `async_channel` and applied in
//! [`app::App::on_tick`]. A completion arriving after the app is gone lands
//! in a closed channel and is dropped silently.
//!
//! ### Screen state machine
//!
//! Each list screen runs `Idle -> Loading -> { Rendered, ErrorShown }`,
//! re-entering `Loading` on pull-to-refresh or on first appearance with an
//! empty list. The error dialog is terminal: no automated recovery happens
//! above the composed service.

pub mod app;
pub mod core;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, CurrentUser, Screen, Session};
pub use self::core::{ItemViewModel, ItemsService, ServiceError};
