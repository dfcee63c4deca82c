//! Ingestion of the upstream job listing.
//!
//! Each run re-fetches the full listing and inserts every posting whose
//! upstream id is not stored yet. Existing rows are never updated or removed.
//! Items are processed one at a time; a bad item is logged and skipped.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use futures::stream::{self, StreamExt};
use remotive_client::RemoteJob;
use serde_json::Value;
use sqlx::PgPool;

use super::models::{CreateJobPosting, JobPosting};
use crate::kernel::BaseJobFeed;

/// What happened to a single listing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Inserted,
    /// Upstream id already stored.
    Skipped,
    Failed(String),
}

/// Per-run totals, logged once at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub fetched: usize,
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl IngestSummary {
    pub fn record(mut self, outcome: &IngestOutcome) -> Self {
        match outcome {
            IngestOutcome::Inserted => self.inserted += 1,
            IngestOutcome::Skipped => self.skipped += 1,
            IngestOutcome::Failed(_) => self.failed += 1,
        }
        self
    }
}

/// Fetch the listing once and insert unseen postings.
///
/// Returns `Err` only when the listing itself can't be fetched; per-item
/// failures are counted in the summary.
pub async fn ingest_remote_jobs(feed: &dyn BaseJobFeed, pool: &PgPool) -> Result<IngestSummary> {
    let items = feed
        .fetch_jobs()
        .await
        .context("Error fetching remote jobs")?;

    tracing::info!(count = items.len(), "Fetched remote job listing");

    let initial = IngestSummary {
        fetched: items.len(),
        ..Default::default()
    };

    let summary = stream::iter(items)
        .fold(initial, |summary, item| async move {
            let item_id = item.get("id").cloned().unwrap_or(Value::Null);
            let outcome = ingest_item(item, pool).await;
            match &outcome {
                IngestOutcome::Inserted => tracing::debug!(job_id = %item_id, "Inserted job posting"),
                IngestOutcome::Skipped => tracing::trace!(job_id = %item_id, "Job posting already stored"),
                IngestOutcome::Failed(reason) => {
                    tracing::warn!(job_id = %item_id, error = %reason, "Error saving job")
                }
            }
            summary.record(&outcome)
        })
        .await;

    tracing::info!(
        fetched = summary.fetched,
        inserted = summary.inserted,
        skipped = summary.skipped,
        failed = summary.failed,
        "Remote job ingestion complete"
    );

    Ok(summary)
}

/// Run one ingestion pass, logging a top-level failure instead of returning it.
pub async fn run_ingestion(feed: &dyn BaseJobFeed, pool: &PgPool) {
    if let Err(e) = ingest_remote_jobs(feed, pool).await {
        tracing::error!(error = %format!("{:#}", e), "Remote job ingestion aborted");
    }
}

async fn ingest_item(item: Value, pool: &PgPool) -> IngestOutcome {
    match try_ingest_item(item, pool).await {
        Ok(outcome) => outcome,
        Err(e) => IngestOutcome::Failed(format!("{:#}", e)),
    }
}

async fn try_ingest_item(item: Value, pool: &PgPool) -> Result<IngestOutcome> {
    let remote = RemoteJob::from_value(item).context("Malformed job item")?;

    // Without an id there is nothing to match; the insert rejects it below.
    if let Some(id) = remote.id {
        if JobPosting::find_by_external_id(id, pool).await?.is_some() {
            return Ok(IngestOutcome::Skipped);
        }
    }

    let input = to_create_input(remote)?;
    JobPosting::create(input, pool).await?;
    Ok(IngestOutcome::Inserted)
}

fn to_create_input(remote: RemoteJob) -> Result<CreateJobPosting> {
    let publication_date = parse_publication_date(remote.publication_date.as_deref())?;

    Ok(CreateJobPosting {
        id: remote.id,
        url: remote.url,
        title: remote.title,
        company_name: remote.company_name,
        company_logo: remote.company_logo,
        category: remote.category,
        tags: remote.tags,
        job_type: remote.job_type,
        publication_date,
        candidate_required_location: remote.candidate_required_location,
        salary: remote.salary,
        description: remote.description,
    })
}

/// Coerce the upstream publication date into a UTC timestamp.
///
/// Accepts RFC 3339, offset-less `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC) and
/// bare `YYYY-MM-DD`. Missing or blank values map to `None`.
pub fn parse_publication_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc()));
    }

    anyhow::bail!("Invalid publication_date: {}", raw)
}
