//! # Source Adapters
//!
//! One adapter per data source, each implementing
//! [`ItemsService`](crate::core::service::ItemsService): call the accessor,
//! map domain records to rows, bind each row's activation to exactly one
//! record. Decoration (retry, cache fallback) happens above these, in the
//! screen assembly.

pub mod cached_friends;
pub mod cards;
pub mod friends;
pub mod transfers;

pub use cached_friends::CachedFriendsItemsAdapter;
pub use cards::CardsItemsAdapter;
pub use friends::FriendsItemsAdapter;
pub use transfers::{TransferScope, TransfersItemsAdapter};
