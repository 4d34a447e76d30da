//! # Item View Model
//!
//! The display-ready row rendered by every list screen. Adapters map one
//! domain record (friend, card, transfer) into one [`ItemViewModel`]; the
//! list screen never sees the domain type behind a row.

use std::fmt;
use std::sync::Arc;

use shared::{Card, Friend, Transfer};

use crate::utils::format;

/// Zero-argument activation action attached to a row.
pub type SelectAction = Arc<dyn Fn() + Send + Sync>;

/// A display-ready list row: label, detail, and an opaque activation action.
///
/// Immutable once constructed. The owning screen replaces its whole item list
/// on every successful load; rows are never mutated in place.
#[derive(Clone)]
pub struct ItemViewModel {
    pub label_text: String,
    pub detail_text: String,
    select: SelectAction,
}

impl ItemViewModel {
    pub fn new(
        label_text: impl Into<String>,
        detail_text: impl Into<String>,
        select: SelectAction,
    ) -> Self {
        Self {
            label_text: label_text.into(),
            detail_text: detail_text.into(),
            select,
        }
    }

    /// Row for a friend: name over phone number.
    pub fn friend(friend: &Friend, select: SelectAction) -> Self {
        Self::new(friend.name.clone(), friend.phone.clone(), select)
    }

    /// Row for a card: masked number over holder name.
    pub fn card(card: &Card, select: SelectAction) -> Self {
        Self::new(card.number.clone(), card.holder.clone(), select)
    }

    /// Row for a transfer: "amount • description" over the counterparty line.
    ///
    /// Sent rows use the long date style, received rows the short one.
    pub fn transfer(transfer: &Transfer, long_date_style: bool, select: SelectAction) -> Self {
        let amount = format::currency(transfer.amount, &transfer.currency_code);
        let label = format!("{} • {}", amount, transfer.description);

        let detail = if long_date_style {
            format!(
                "Sent to: {} on {}",
                transfer.recipient,
                format::long_date(transfer.date)
            )
        } else {
            format!(
                "Received from: {} on {}",
                transfer.sender,
                format::short_date(transfer.date)
            )
        };

        Self::new(label, detail, select)
    }

    /// Invoke the row's activation action (navigation, supplied by assembly).
    pub fn select(&self) {
        (self.select)();
    }
}

impl fmt::Debug for ItemViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemViewModel")
            .field("label_text", &self.label_text)
            .field("detail_text", &self.detail_text)
            .finish_non_exhaustive()
    }
}

// Semantic equality: two rows are the same when they render the same text.
// Activation actions are intentionally excluded.
impl PartialEq for ItemViewModel {
    fn eq(&self, other: &Self) -> bool {
        self.label_text == other.label_text && self.detail_text == other.detail_text
    }
}
