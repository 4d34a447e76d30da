//! # Application State Types
//!
//! All state-related types for the application: the screen catalog, the
//! per-screen list state machine, the session, and the global state shared
//! between the UI thread and async load tasks.

use std::collections::HashMap;

use crate::app::events::{ActionRoute, DetailRoute};
use crate::core::item::ItemViewModel;
use crate::core::service::LoadResult;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Contact list
    Friends,
    /// Payment cards
    Cards,
    /// Transfers sent by the current user
    SentTransfers,
    /// Transfers received by the current user
    ReceivedTransfers,
}

impl Screen {
    /// Get all screens in tab navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Friends,
            Screen::SentTransfers,
            Screen::ReceivedTransfers,
            Screen::Cards,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Friends => "Friends",
            Screen::Cards => "Cards",
            Screen::SentTransfers => "Sent",
            Screen::ReceivedTransfers => "Received",
        }
    }

    /// The screen's primary action (the right-bar-button equivalent)
    pub fn action(&self) -> ActionRoute {
        match self {
            Screen::Friends => ActionRoute::AddFriend,
            Screen::Cards => ActionRoute::AddCard,
            Screen::SentTransfers => ActionRoute::SendMoney,
            Screen::ReceivedTransfers => ActionRoute::RequestMoney,
        }
    }
}

/// Phase of a list screen's load cycle.
///
/// `Idle -> Loading -> { Rendered, ErrorShown }`; pull-to-refresh re-enters
/// `Loading` from anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    /// Nothing loaded yet, no load in flight
    Idle,
    /// A load is in flight
    Loading,
    /// The current item list is on screen
    Rendered,
    /// The composed service exhausted all recovery; error dialog is up
    ErrorShown(String),
}

/// One screen's list state: the rows plus where the load cycle stands.
#[derive(Debug, Clone)]
pub struct ListState {
    pub items: Vec<ItemViewModel>,
    pub phase: ListPhase,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: ListPhase::Idle,
        }
    }

    /// First appearance loads only when there is nothing to show yet.
    pub fn should_load_on_appear(&self) -> bool {
        self.items.is_empty()
    }

    pub fn begin_loading(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// Apply a finished load. Success replaces the item list wholesale;
    /// failure keeps the previous rows and raises the error dialog.
    ///
    /// Overlapping loads are an accepted race: whichever outcome arrives
    /// last wins.
    pub fn apply_outcome(&mut self, outcome: LoadResult) {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.phase = ListPhase::Rendered;
            }
            Err(error) => {
                self.phase = ListPhase::ErrorShown(error.to_string());
            }
        }
    }

    /// Dismiss the error dialog, returning to the previous rendered list
    /// (or idle when there was never one).
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, ListPhase::ErrorShown(_)) {
            self.phase = if self.items.is_empty() {
                ListPhase::Idle
            } else {
                ListPhase::Rendered
            };
        }
    }

    /// Activate the row at `index`. Returns false when out of range.
    pub fn select(&self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                item.select();
                true
            }
            None => false,
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Current user information
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    /// Premium accounts get the offline friends cache
    pub is_premium: bool,
}

/// The signed-in session. Entitlement is consulted once, at service
/// assembly; nothing re-checks it at load time.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<CurrentUser>,
}

impl Session {
    pub fn new(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_premium(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_premium)
    }
}

/// Global application state
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// The signed-in session
    pub session: Session,
    /// Per-screen list state
    pub lists: HashMap<Screen, ListState>,
    /// Pending detail navigation (row activation), popped by the shell
    pub detail: Option<DetailRoute>,
    /// Pending primary-action navigation, popped by the shell
    pub action: Option<ActionRoute>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let lists = Screen::all()
            .iter()
            .map(|screen| (*screen, ListState::new()))
            .collect();

        Self {
            current_screen: Screen::Friends,
            session,
            lists,
            detail: None,
            action: None,
        }
    }

    pub fn list(&self, screen: Screen) -> &ListState {
        self.lists.get(&screen).expect("every screen has list state")
    }

    pub fn list_mut(&mut self, screen: Screen) -> &mut ListState {
        self.lists.get_mut(&screen).expect("every screen has list state")
    }
}
