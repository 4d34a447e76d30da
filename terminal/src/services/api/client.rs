//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::Client;

/// Default base URL for the backend API server
const API_BASE_URL: &str = "http://127.0.0.1:3001";

/// Environment variable overriding the backend base URL
const API_URL_ENV: &str = "LEDGER_API_URL";

/// HTTP client for communicating with the backend banking API.
///
/// Holds a pooled `reqwest::Client`; cheap to share behind an `Arc`. The
/// per-domain accessor functions live in the sibling modules and take the
/// client by reference.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent a dead
    /// backend from freezing load attempts. Base URL comes from
    /// `LEDGER_API_URL` when set.
    pub fn new() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| API_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL (used by tests and demos).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
