//! # Cache-backed Friends Adapter
//!
//! Serves the last persisted friend list when the live path is exhausted.
//! Maps records exactly like the live adapter so the screen cannot tell the
//! two apart. Only ever wired as a fallback target, never as a primary.

use std::sync::Arc;

use async_trait::async_trait;
use shared::Friend;

use crate::core::item::ItemViewModel;
use crate::core::service::{ItemsService, LoadResult, SelectionHandler};
use crate::services::cache::FriendsStore;

pub struct CachedFriendsItemsAdapter {
    store: Arc<dyn FriendsStore>,
    selection: SelectionHandler<Friend>,
}

impl CachedFriendsItemsAdapter {
    pub fn new(store: Arc<dyn FriendsStore>, selection: SelectionHandler<Friend>) -> Self {
        Self { store, selection }
    }
}

#[async_trait]
impl ItemsService for CachedFriendsItemsAdapter {
    async fn load_items(&self) -> LoadResult {
        let friends = self.store.load().await?;

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
