//! # Application Events
//!
//! Event types for async task communication between background load tasks
//! and the main thread, plus the navigation routes the shell consumes.

use shared::{Card, Friend, Transfer};

use crate::app::state::Screen;
use crate::core::service::LoadResult;

/// Async task results sent to the main thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A screen's load finished (success or exhausted failure)
    ItemsLoaded { screen: Screen, outcome: LoadResult },
    /// A row was activated; the shell should push the detail screen
    ShowDetail(DetailRoute),
}

/// Detail screen requested by a row activation. Carries the full domain
/// record; rendering the detail screen is the shell's business.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailRoute {
    Friend(Friend),
    Card(Card),
    Transfer(Transfer),
}

/// Modal flows reachable from a screen's primary action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRoute {
    AddFriend,
    AddCard,
    SendMoney,
    RequestMoney,
}
