//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the terminal frontend and the
//! remote banking API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::friends`]**: Friend records and list envelope
//!   - **[`dto::cards`]**: Card records and list envelope
//!   - **[`dto::transfers`]**: Transfer records and list envelope
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional use
//! - Transfer timestamps are RFC 3339 strings (via `chrono`'s serde support)

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
