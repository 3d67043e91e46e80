//! Lookup client for the brand search service

use async_trait::async_trait;
use gloo_net::http::Request;
use logo_search::domain::Suggestion;
use logo_search::lookup::{search_url, BrandLookup, LookupError};

#[derive(Debug, Clone)]
pub struct GlooLookup {
    base_url: String,
}

impl GlooLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl BrandLookup for GlooLookup {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let url = search_url(&self.base_url, query);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(LookupError::Status(response.status()));
        }

        response
            .json::<Vec<Suggestion>>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}
