//! # Friends Endpoint
//!
//! Accessor for the contact-list endpoint.

use shared::{Friend, FriendsResponse};

use super::client::ApiClient;
use crate::core::error::ServiceError;

/// Fetch the user's friend list.
#[tracing::instrument(skip(client))]
pub async fn load_friends(client: &ApiClient) -> Result<Vec<Friend>, ServiceError> {
    let url = format!("{}/api/friends", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| ServiceError::Network(format!("friends request failed: {e}")))?;

    if response.status().is_success() {
        let body = response
            .json::<FriendsResponse>()
            .await
            .map_err(|e| ServiceError::Network(format!("friends response malformed: {e}")))?;
        tracing::debug!(count = body.friends.len(), "Friends fetched");
        Ok(body.friends)
    } else {
        let status = response.status();
        tracing::warn!(status = status.as_u16(), "Friends fetch failed");
        Err(ServiceError::Network(format!(
            "friends fetch failed with status {status}"
        )))
    }
}
