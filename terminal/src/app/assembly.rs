//! # Screen Service Assembly
//!
//! Builds each screen's composed `ItemsService` once, at app construction.
//! This is the only place that knows the per-screen resilience policy:
//!
//! | Screen        | Retry           | Fallback                          |
//! |---------------|-----------------|-----------------------------------|
//! | Friends       | 2 extra attempts| cache-backed adapter, premium only|
//! | Cards         | none            | none                              |
//! | Sent/Received | 1 extra attempt | none                              |
//!
//! The screens receive one opaque `Arc<dyn ItemsService>` each and never
//! learn what is stacked behind it. Entitlement is read here, once; it picks
//! both the fallback wiring and the store the live friends adapter saves
//! into (premium: the JSON file store, otherwise the null store).

use std::collections::HashMap;
use std::sync::Arc;

use async_channel::Sender;
use shared::{Card, Friend, Transfer};

use crate::app::events::{AppEvent, DetailRoute};
use crate::app::state::{Screen, Session};
use crate::core::fallback::FallbackItemsService;
use crate::core::retry::RetryItemsService;
use crate::core::service::{ItemsService, SelectionHandler};
use crate::services::adapters::{
    CachedFriendsItemsAdapter, CardsItemsAdapter, FriendsItemsAdapter, TransferScope,
    TransfersItemsAdapter,
};
use crate::services::api::{ApiClient, CardsApi, FriendsApi, TransfersApi};
use crate::services::cache::{FriendsStore, JsonFileStore, NullFriendsStore};

/// Build the full screen-to-service table against the real API client and
/// the configured cache store.
pub(crate) fn build_screen_services(
    session: &Session,
    event_tx: &Sender<AppEvent>,
) -> HashMap<Screen, Arc<dyn ItemsService>> {
    let api = Arc::new(ApiClient::new());
    let store: Arc<dyn FriendsStore> = Arc::new(JsonFileStore::from_env());

    let mut services: HashMap<Screen, Arc<dyn ItemsService>> = HashMap::new();

    services.insert(
        Screen::Friends,
        friends_service(
            api.clone(),
            store,
            session.is_premium(),
            detail_selection(event_tx.clone(), DetailRoute::Friend),
        ),
    );
    services.insert(
        Screen::Cards,
        cards_service(
            api.clone(),
            detail_selection(event_tx.clone(), DetailRoute::Card),
        ),
    );
    services.insert(
        Screen::SentTransfers,
        transfers_service(
            api.clone(),
            detail_selection(event_tx.clone(), DetailRoute::Transfer),
            TransferScope::Sent,
        ),
    );
    services.insert(
        Screen::ReceivedTransfers,
        transfers_service(
            api,
            detail_selection(event_tx.clone(), DetailRoute::Transfer),
            TransferScope::Received,
        ),
    );

    services
}

/// Selection callback that turns an activated record into a detail route on
/// the app event channel. The channel is unbounded, so `try_send` only fails
/// once the app is gone, and then dropping the route is the right thing.
fn detail_selection<T, F>(event_tx: Sender<AppEvent>, route: F) -> SelectionHandler<T>
where
    T: Send + Sync + 'static,
    F: Fn(T) -> DetailRoute + Send + Sync + 'static,
{
    Arc::new(move |record: T| {
        let _ = event_tx.try_send(AppEvent::ShowDetail(route(record)));
    })
}

/// Friends: three attempts against the network; premium sessions then fall
/// back to whatever the cache last saw. Non-premium sessions get the null
/// store, so neither the save side effect nor the fallback path exists for
/// them.
pub(crate) fn friends_service(
    api: Arc<dyn FriendsApi>,
    store: Arc<dyn FriendsStore>,
    entitled: bool,
    selection: SelectionHandler<Friend>,
) -> Arc<dyn ItemsService> {
    if entitled {
        let live: Arc<dyn ItemsService> = Arc::new(FriendsItemsAdapter::new(
            api,
            Arc::clone(&store),
            Arc::clone(&selection),
        ));
        live.retrying(2)
            .falling_back_to(Arc::new(CachedFriendsItemsAdapter::new(store, selection)))
    } else {
        let live: Arc<dyn ItemsService> = Arc::new(FriendsItemsAdapter::new(
            api,
            Arc::new(NullFriendsStore),
            selection,
        ));
        live.retrying(2)
    }
}

/// Cards: a single attempt, no recovery.
pub(crate) fn cards_service(
    api: Arc<dyn CardsApi>,
    selection: SelectionHandler<Card>,
) -> Arc<dyn ItemsService> {
    Arc::new(CardsItemsAdapter::new(api, selection))
}

/// Transfers: two attempts, no fallback; the scope fixes the partition.
pub(crate) fn transfers_service(
    api: Arc<dyn TransfersApi>,
    selection: SelectionHandler<Transfer>,
    scope: TransferScope,
) -> Arc<dyn ItemsService> {
    let live: Arc<dyn ItemsService> = Arc::new(TransfersItemsAdapter::new(api, selection, scope));
    live.retrying(1)
}
