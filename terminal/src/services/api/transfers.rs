//! # Transfers Endpoint
//!
//! Accessor for the money-transfers endpoint. A single endpoint returns both
//! directions; direction filtering happens in the adapter, not here.

use shared::{Transfer, TransfersResponse};

use super::client::ApiClient;
use crate::core::error::ServiceError;

/// Fetch all transfers for the current user, sent and received.
#[tracing::instrument(skip(client))]
pub async fn load_transfers(client: &ApiClient) -> Result<Vec<Transfer>, ServiceError> {
    let url = format!("{}/api/transfers", client.base_url());

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| ServiceError::Network(format!("transfers request failed: {e}")))?;

    if response.status().is_success() {
        let body = response
            .json::<TransfersResponse>()
            .await
            .map_err(|e| ServiceError::Network(format!("transfers response malformed: {e}")))?;
        tracing::debug!(count = body.transfers.len(), "Transfers fetched");
        Ok(body.transfers)
    } else {
        let status = response.status();
        tracing::warn!(status = status.as_u16(), "Transfers fetch failed");
        Err(ServiceError::Network(format!(
            "transfers fetch failed with status {status}"
        )))
    }
}
