//! Jobs domain - mirrored remote job postings.

pub mod ingestion;
pub mod models;

pub use ingestion::{ingest_remote_jobs, run_ingestion, IngestOutcome, IngestSummary};
pub use models::{CreateJobPosting, JobPosting};
