// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseJobFeed)

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

// =============================================================================
// Job Feed Trait (Infrastructure - upstream job listing)
// =============================================================================

#[async_trait]
pub trait BaseJobFeed: Send + Sync {
    /// Fetch the full current listing as raw JSON items.
    ///
    /// An `Err` means the listing as a whole could not be read (network,
    /// status, or envelope). Individual items are decoded by the caller.
    async fn fetch_jobs(&self) -> Result<Vec<Value>>;
}
