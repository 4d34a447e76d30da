//! # Cards Source Adapter
//!
//! Maps the live card list into display rows. No side effects, no filtering.

use std::sync::Arc;

use async_trait::async_trait;
use shared::Card;

use crate::core::item::ItemViewModel;
use crate::core::service::{ItemsService, LoadResult, SelectionHandler};
use crate::services::api::CardsApi;

pub struct CardsItemsAdapter {
    api: Arc<dyn CardsApi>,
    selection: SelectionHandler<Card>,
}

impl CardsItemsAdapter {
    pub fn new(api: Arc<dyn CardsApi>, selection: SelectionHandler<Card>) -> Self {
        Self { api, selection }
    }
}

#[async_trait]
impl ItemsService for CardsItemsAdapter {
    async fn load_items(&self) -> LoadResult {
        let cards = self.api.load_cards().await?;

        Ok(cards
            .into_iter()
            .map(|card| {
                let selection = Arc::clone(&self.selection);
                let record = card.clone();
                ItemViewModel::card(&card, Arc::new(move || selection(record.clone())))
            })
            .collect())
    }
}
