//! Pure Remotive REST API client.
//!
//! A minimal client for the public remote-jobs listing. The endpoint returns
//! the full current listing on every call; there is no paging or delta sync.
//!
//! # Example
//!
//! ```rust,ignore
//! use remotive_client::{RemoteJob, RemotiveClient};
//!
//! let client = RemotiveClient::new();
//!
//! for item in client.fetch_raw_jobs().await? {
//!     let job = RemoteJob::from_value(item)?;
//!     println!("{}", job.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{RemotiveError, Result};
pub use types::{JobsResponse, RemoteJob};

use serde_json::Value;

pub const DEFAULT_URL: &str = "https://remotive.com/api/remote-jobs";

#[derive(Debug, Clone)]
pub struct RemotiveClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RemotiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotiveClient {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL)
    }

    /// Point the client at a different listing endpoint (mirrors, tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current listing, leaving each item as raw JSON.
    pub async fn fetch_raw_jobs(&self) -> Result<Vec<Value>> {
        let resp = self.client.get(&self.base_url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemotiveError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await?;
        let listing: JobsResponse = serde_json::from_slice(&body)?;
        tracing::debug!(count = listing.jobs.len(), url = %self.base_url, "Fetched remote jobs");

        Ok(listing.jobs)
    }
}
