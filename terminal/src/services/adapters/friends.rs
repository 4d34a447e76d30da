//! # Friends Source Adapter
//!
//! Maps the live friend list into display rows. The one adapter with a side
//! effect: every successful fetch is persisted through the configured
//! [`FriendsStore`] so the cache fallback has something to serve later.
//! Persistence is best-effort; a store error is logged and never fails the
//! load. Non-premium sessions get the null store here, so the save becomes a
//! no-op by construction rather than by branching.

use std::sync::Arc;

use async_trait::async_trait;
use shared::Friend;

use crate::core::item::ItemViewModel;
use crate::core::service::{ItemsService, LoadResult, SelectionHandler};
use crate::services::api::FriendsApi;
use crate::services::cache::FriendsStore;

pub struct FriendsItemsAdapter {
    api: Arc<dyn FriendsApi>,
    store: Arc<dyn FriendsStore>,
    selection: SelectionHandler<Friend>,
}

impl FriendsItemsAdapter {
    pub fn new(
        api: Arc<dyn FriendsApi>,
        store: Arc<dyn FriendsStore>,
        selection: SelectionHandler<Friend>,
    ) -> Self {
        Self {
            api,
            store,
            selection,
        }
    }
}

#[async_trait]
impl ItemsService for FriendsItemsAdapter {
    async fn load_items(&self) -> LoadResult {
        let friends = self.api.load_friends().await?;

        // Best-effort persistence: a failed save must not fail the load.
        if let Err(error) = self.store.save(&friends).await {
            tracing::warn!(%error, "friends cache save failed, continuing");
        }

        Ok(friends
            .into_iter()
            .map(|friend| {
                let selection = Arc::clone(&self.selection);
                let record = friend.clone();
                ItemViewModel::friend(&friend, Arc::new(move || selection(record.clone())))
            })
            .collect())
    }
}
