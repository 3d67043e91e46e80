//! Remote brand lookup: request sequencing, URL construction and the port
//! hosts implement against their HTTP stack.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Suggestion;

/// Default lookup service origin
pub const DEFAULT_BASE_URL: &str = "https://api.brandfetch.io";

/// Lookup failures. None of them change the visible suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("service answered with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// A lookup the host should run on behalf of the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Issue order; only the latest request may commit
    pub seq: u64,
    /// Exact text typed by the user
    pub query: String,
}

/// Build the search URL, percent-encoding the query as one path segment
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/v2/search/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// Port for the remote lookup service.
///
/// Futures are `?Send` so the browser adapter can hold JS handles.
#[async_trait(?Send)]
pub trait BrandLookup {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, LookupError>;
}

#[cfg(feature = "native")]
pub use http::HttpLookup;

#[cfg(feature = "native")]
mod http {
    use super::*;

    /// reqwest-backed lookup used by the terminal host
    #[derive(Debug, Clone)]
    pub struct HttpLookup {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpLookup {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }

        pub fn client(&self) -> &reqwest::Client {
            &self.client
        }
    }

    #[async_trait(?Send)]
    impl BrandLookup for HttpLookup {
        async fn search(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
            let url = search_url(&self.base_url, query);
            tracing::debug!("GET {}", url);

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| LookupError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }

            response
                .json::<Vec<Suggestion>>()
                .await
                .map_err(|e| LookupError::Decode(e.to_string()))
        }
    }
}
