//! # Card Data Transfer Objects
//!
//! Defines the payment card record returned by the cards endpoint.

use serde::{Deserialize, Serialize};

/// A payment card belonging to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    /// Masked card number as rendered in the list (e.g. "**** 1234")
    pub number: String,
    pub holder: String,
}

/// List of cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    pub cards: Vec<Card>,
}
