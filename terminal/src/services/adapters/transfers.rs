//! # Transfers Source Adapter
//!
//! Maps the live transfer list into display rows for ONE direction. The
//! backend returns both directions in a single list; the adapter partitions
//! by `is_sender` before mapping, preserving relative order. Direction is
//! fixed at construction and also selects the date style of the detail line
//! (sent rows long, received rows short).

use std::sync::Arc;

use async_trait::async_trait;
use shared::Transfer;

use crate::core::item::ItemViewModel;
use crate::core::service::{ItemsService, LoadResult, SelectionHandler};
use crate::services::api::TransfersApi;

/// Which partition of the transfer list a screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferScope {
    Sent,
    Received,
}

impl TransferScope {
    fn includes(self, transfer: &Transfer) -> bool {
        match self {
            TransferScope::Sent => transfer.is_sender,
            TransferScope::Received => !transfer.is_sender,
        }
    }

    fn long_date_style(self) -> bool {
        matches!(self, TransferScope::Sent)
    }
}

pub struct TransfersItemsAdapter {
    api: Arc<dyn TransfersApi>,
    selection: SelectionHandler<Transfer>,
    scope: TransferScope,
}

impl TransfersItemsAdapter {
    pub fn new(
        api: Arc<dyn TransfersApi>,
        selection: SelectionHandler<Transfer>,
        scope: TransferScope,
    ) -> Self {
        Self {
            api,
            selection,
            scope,
        }
    }
}

#[async_trait]
impl ItemsService for TransfersItemsAdapter {
    async fn load_items(&self) -> LoadResult {
        let transfers = self.api.load_transfers().await?;

        Ok(transfers
            .into_iter()
            .filter(|transfer| self.scope.includes(transfer))
            .map(|transfer| {
                let selection = Arc::clone(&self.selection);
                let record = transfer.clone();
                ItemViewModel::transfer(
                    &transfer,
                    self.scope.long_date_style(),
                    Arc::new(move || selection(record.clone())),
                )
            })
            .collect())
    }
}
