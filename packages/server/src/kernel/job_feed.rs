//! Production job feed backed by the Remotive API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use remotive_client::RemotiveClient;
use serde_json::Value;

use super::BaseJobFeed;

pub struct RemotiveJobFeed {
    client: RemotiveClient,
}

impl RemotiveJobFeed {
    pub fn new(client: RemotiveClient) -> Self {
        Self { client }
    }

    pub fn from_url(url: &str) -> Self {
        Self::new(RemotiveClient::with_url(url))
    }
}

#[async_trait]
impl BaseJobFeed for RemotiveJobFeed {
    async fn fetch_jobs(&self) -> Result<Vec<Value>> {
        self.client
            .fetch_raw_jobs()
            .await
            .with_context(|| format!("Failed to fetch job listing from {}", self.client.url()))
    }
}
