//! # Friends Cache Store
//!
//! Local persistence for the last successfully fetched friend list. Premium
//! sessions write it after every live load and read it back when the network
//! path is exhausted; non-premium sessions are wired with the null store so
//! neither side of that behavior exists in their composition.
//!
//! The store is deliberately dumb: one JSON document, replaced wholesale.

use std::path::PathBuf;

use async_trait::async_trait;
use shared::Friend;

use crate::core::error::ServiceError;

/// Default on-disk location of the cached friend list
const CACHE_PATH_DEFAULT: &str = "./ledger-cache.json";

/// Environment variable overriding the cache file location
const CACHE_PATH_ENV: &str = "LEDGER_CACHE_PATH";

/// Persistence seam for the friend list.
///
/// `save` is best-effort: callers log and discard its error. `load` reports
/// [`ServiceError::CacheMiss`] when nothing has ever been persisted.
#[async_trait]
pub trait FriendsStore: Send + Sync {
    async fn save(&self, friends: &[Friend]) -> Result<(), ServiceError>;
    async fn load(&self) -> Result<Vec<Friend>, ServiceError>;
}

/// JSON-file backed store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location (`LEDGER_CACHE_PATH` or the default).
    pub fn from_env() -> Self {
        let path =
            std::env::var(CACHE_PATH_ENV).unwrap_or_else(|_| CACHE_PATH_DEFAULT.to_string());
        Self::new(path)
    }
}

#[async_trait]
impl FriendsStore for JsonFileStore {
    async fn save(&self, friends: &[Friend]) -> Result<(), ServiceError> {
        let body = serde_json::to_vec(friends)
            .map_err(|e| ServiceError::Cache(format!("encode failed: {e}")))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| ServiceError::Cache(format!("write failed: {e}")))?;
        tracing::debug!(path = %self.path.display(), count = friends.len(), "Friends cached");
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Friend>, ServiceError> {
        let body = match tokio::fs::read(&self.path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ServiceError::CacheMiss);
            }
            Err(e) => return Err(ServiceError::Cache(format!("read failed: {e}"))),
        };

        serde_json::from_slice(&body)
            .map_err(|e| ServiceError::Cache(format!("decode failed: {e}")))
    }
}

/// Null object: swallows saves, reports a miss on load.
///
/// Wired in for non-premium sessions so the friends adapter has no
/// conditional save logic of its own.
pub struct NullFriendsStore;

#[async_trait]
impl FriendsStore for NullFriendsStore {
    async fn save(&self, _friends: &[Friend]) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Friend>, ServiceError> {
        Err(ServiceError::CacheMiss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_friends() -> Vec<Friend> {
        vec![
            Friend {
                id: 1,
                name: "Alice".to_string(),
                phone: "+1 555 0100".to_string(),
            },
            Friend {
                id: 2,
                name: "Bob".to_string(),
                phone: "+1 555 0101".to_string(),
            },
        ]
    }

    fn temp_store(tag: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!(
            "ledger-cache-test-{}-{}.json",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    #[tokio::test]
    async fn test_json_store_round_trips_friend_list() {
        let store = temp_store("roundtrip");
        store.save(&sample_friends()).await.expect("save succeeds");

        let loaded = store.load().await.expect("load succeeds");
        assert_eq!(loaded, sample_friends());
    }

    #[tokio::test]
    async fn test_json_store_reports_miss_when_never_populated() {
        let store = temp_store("miss");
        assert_eq!(store.load().await, Err(ServiceError::CacheMiss));
    }

    #[tokio::test]
    async fn test_json_store_save_replaces_previous_list() {
        let store = temp_store("replace");
        store.save(&sample_friends()).await.expect("first save");
        let shorter = vec![sample_friends().remove(0)];
        store.save(&shorter).await.expect("second save");

        assert_eq!(store.load().await, Ok(shorter));
    }

    #[tokio::test]
    async fn test_null_store_swallows_save_and_misses_on_load() {
        let store = NullFriendsStore;
        assert_eq!(store.save(&sample_friends()).await, Ok(()));
        assert_eq!(store.load().await, Err(ServiceError::CacheMiss));
    }
}
