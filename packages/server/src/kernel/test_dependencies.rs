// TestDependencies - mock implementations for testing
//
// Provides a mock job feed that can stand in for the Remotive API.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::BaseJobFeed;

// =============================================================================
// Mock Job Feed
// =============================================================================

#[derive(Clone)]
enum FeedResponse {
    Jobs(Vec<Value>),
    Error(String),
}

/// Serves the same canned listing (or failure) on every fetch.
#[derive(Clone)]
pub struct MockJobFeed {
    response: Arc<Mutex<FeedResponse>>,
    fetch_calls: Arc<Mutex<usize>>,
}

impl MockJobFeed {
    pub fn new() -> Self {
        Self::with_jobs(Vec::new())
    }

    pub fn with_jobs(jobs: Vec<Value>) -> Self {
        Self {
            response: Arc::new(Mutex::new(FeedResponse::Jobs(jobs))),
            fetch_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Every fetch fails with `message`, like an unreachable upstream.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(FeedResponse::Error(message.to_string()))),
            fetch_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Replace the listing served by subsequent fetches.
    pub fn set_jobs(&self, jobs: Vec<Value>) {
        *self.response.lock().unwrap() = FeedResponse::Jobs(jobs);
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

impl Default for MockJobFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseJobFeed for MockJobFeed {
    async fn fetch_jobs(&self) -> Result<Vec<Value>> {
        *self.fetch_calls.lock().unwrap() += 1;
        let response = self.response.lock().unwrap().clone();
        match response {
            FeedResponse::Jobs(jobs) => Ok(jobs),
            FeedResponse::Error(message) => Err(anyhow::anyhow!(message)),
        }
    }
}
