//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! Ingestion always runs once when the server starts. When a schedule is
//! configured, the same pass is repeated on that cron cadence.
//!
//! ```text
//! Scheduler (INGEST_SCHEDULE)
//!     │
//!     └─► run_ingestion()
//!             └─► fetch full listing → insert ids not yet stored
//! ```

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::jobs::run_ingestion;
use crate::kernel::BaseJobFeed;

/// Start the periodic ingestion task on `schedule` (6-field cron, seconds first).
pub async fn start_scheduler(
    schedule: &str,
    feed: Arc<dyn BaseJobFeed>,
    pool: PgPool,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let ingest_job = Job::new_async(schedule, move |_uuid, _lock| {
        let feed = feed.clone();
        let pool = pool.clone();
        Box::pin(async move {
            tracing::info!("Scheduled ingestion starting");
            run_ingestion(feed.as_ref(), &pool).await;
        })
    })
    .with_context(|| format!("Invalid ingestion schedule: {}", schedule))?;

    scheduler.add(ingest_job).await?;
    scheduler.start().await?;

    tracing::info!(schedule, "Ingestion scheduler started");
    Ok(scheduler)
}
