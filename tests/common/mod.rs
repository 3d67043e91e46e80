//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use logo_search::domain::Suggestion;
use logo_search::lookup::{BrandLookup, LookupError};
use std::cell::RefCell;
use std::collections::HashMap;

/// Scripted lookup service that records every query it receives
#[derive(Default)]
pub struct FakeLookup {
    responses: HashMap<String, Result<Vec<Suggestion>, LookupError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, query: &str, suggestions: Vec<Suggestion>) -> Self {
        self.responses.insert(query.to_string(), Ok(suggestions));
        self
    }

    pub fn fail(mut self, query: &str, error: LookupError) -> Self {
        self.responses.insert(query.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl BrandLookup for FakeLookup {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        self.calls.borrow_mut().push(query.to_string());
        self.responses
            .get(query)
            .cloned()
            .unwrap_or(Err(LookupError::Status(404)))
    }
}

pub fn nike() -> Suggestion {
    Suggestion::new("Nike, Inc.", "nike.com", "https://logo/nike.png")
}
