//! # Backend API Client Module
//!
//! HTTP accessors for the remote banking API, plus the per-domain traits the
//! source adapters depend on. The traits exist so adapters can be exercised
//! against in-memory fakes; `ApiClient` is the one production implementation.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Accessor traits and ApiClient trait impls
//! ├── client.rs    - ApiClient struct and common configuration
//! ├── friends.rs   - GET /api/friends
//! ├── cards.rs     - GET /api/cards
//! └── transfers.rs - GET /api/transfers
//! ```

pub mod cards;
pub mod client;
pub mod friends;
pub mod transfers;

pub use client::ApiClient;

use async_trait::async_trait;
use shared::{Card, Friend, Transfer};

use crate::core::error::ServiceError;

/// Remote accessor for the friend list.
#[async_trait]
pub trait FriendsApi: Send + Sync {
    async fn load_friends(&self) -> Result<Vec<Friend>, ServiceError>;
}

/// Remote accessor for the card list.
#[async_trait]
pub trait CardsApi: Send + Sync {
    async fn load_cards(&self) -> Result<Vec<Card>, ServiceError>;
}

/// Remote accessor for the transfer list (both directions, unfiltered).
#[async_trait]
pub trait TransfersApi: Send + Sync {
    async fn load_transfers(&self) -> Result<Vec<Transfer>, ServiceError>;
}

#[async_trait]
impl FriendsApi for ApiClient {
    async fn load_friends(&self) -> Result<Vec<Friend>, ServiceError> {
        friends::load_friends(self).await
    }
}

#[async_trait]
impl CardsApi for ApiClient {
    async fn load_cards(&self) -> Result<Vec<Card>, ServiceError> {
        cards::load_cards(self).await
    }
}

#[async_trait]
impl TransfersApi for ApiClient {
    async fn load_transfers(&self) -> Result<Vec<Transfer>, ServiceError> {
        transfers::load_transfers(self).await
    }
}
