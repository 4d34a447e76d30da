//! # Transfer Data Transfer Objects
//!
//! Defines the money-transfer record returned by the transfers endpoint.
//! A single endpoint serves both directions; `is_sender` tells whether the
//! current user sent or received the transfer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A money transfer, sent or received by the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    /// ISO 4217 currency code (e.g. "USD")
    pub currency_code: String,
    pub sender: String,
    pub recipient: String,
    /// True when the current user is the sender of this transfer
    pub is_sender: bool,
    pub date: DateTime<Utc>,
}

/// List of transfers (both directions, unfiltered)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransfersResponse {
    pub transfers: Vec<Transfer>,
}
