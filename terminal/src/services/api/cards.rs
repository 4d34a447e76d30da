//! # Cards Endpoint
//!
//! Accessor for the payment-cards endpoint.

use shared::{Card, CardsResponse};

use super::client::ApiClient;
use crate::core::error::ServiceError;

/// Fetch the user's cards.
#[tracing::instrument(skip(client))]
pub async fn load_cards(client: &ApiClient) -> Result<Vec<Card>, ServiceError> {
    let url = format!("{}/api/cards", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| ServiceError::Network(format!("cards request failed: {e}")))?;

    if response.status().is_success() {
        let body = response
            .json::<CardsResponse>()
            .await
            .map_err(|e| ServiceError::Network(format!("cards response malformed: {e}")))?;
        tracing::debug!(count = body.cards.len(), "Cards fetched");
        Ok(body.cards)
    } else {
        let status = response.status();
        tracing::warn!(status = status.as_u16(), "Cards fetch failed");
        Err(ServiceError::Network(format!(
            "cards fetch failed with status {status}"
        )))
    }
}
