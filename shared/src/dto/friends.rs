//! # Friend Data Transfer Objects
//!
//! Defines the friend record returned by the contacts endpoint.

use serde::{Deserialize, Serialize};

/// A friend in the user's contact list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

/// List of friends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsResponse {
    pub friends: Vec<Friend>,
}
