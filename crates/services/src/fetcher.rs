use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::FetchError;

/// Source of the quiz JSON documents.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Fetch the JSON document at `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the document cannot be retrieved or is not JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// In-memory fetcher serving pre-registered documents.
///
/// Unknown URLs fail with `FetchError::NotFound`. Every request is recorded so
/// callers can check what was fetched and how often.
#[derive(Clone, Default)]
pub struct StaticFetcher {
    documents: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StaticFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_document(self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }

    /// Register or replace the document served for `url`.
    pub fn insert(&self, url: impl Into<String>, document: Value) {
        let mut guard = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(url.into(), document);
    }

    /// Stop serving `url`; later requests fail.
    pub fn remove(&self, url: &str) {
        let mut guard = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        guard.remove(url);
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl DataFetcher for StaticFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        let guard = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        guard
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}
