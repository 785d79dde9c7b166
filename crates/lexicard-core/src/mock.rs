//! In-memory data source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LoadError;
use crate::source::DataSource;

/// A data source backed by a map of relative path → JSON value.
///
/// Leading slashes are ignored, so `"/words.json"` and `"words.json"` name
/// the same asset.
#[derive(Debug, Default)]
pub struct MockSource {
    assets: HashMap<String, Value>,
    /// Number of fetches made.
    call_count: AtomicU32,
    /// Last path requested.
    last_request: Mutex<Option<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset.
    pub fn with_asset(mut self, relative: &str, value: Value) -> Self {
        self.assets.insert(key(relative), value);
        self
    }

    /// Get the number of fetches made to this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last path requested from this source.
    pub fn last_request(&self) -> Option<String> {
        self.last_request
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

fn key(relative: &str) -> String {
    relative.trim_start_matches('/').to_string()
}

#[async_trait]
impl DataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_json(&self, relative: &str) -> Result<Value, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(relative.to_string());
        }

        self.assets
            .get(&key(relative))
            .cloned()
            .ok_or_else(|| LoadError::NotFound(relative.to_string()))
    }
}
