//! Test fixtures for creating test data.

use anyhow::Result;
use serde_json::{json, Value};
use server_core::domains::jobs::{CreateJobPosting, JobPosting};
use sqlx::PgPool;

/// Store a posting directly, bypassing ingestion.
pub async fn create_test_posting(pool: &PgPool, id: i64, title: &str) -> Result<JobPosting> {
    JobPosting::create(
        CreateJobPosting {
            id: Some(id),
            title: Some(title.to_string()),
            company_name: Some("Test Company".to_string()),
            tags: vec!["test".to_string()],
            ..Default::default()
        },
        pool,
    )
    .await
}

/// A well-formed upstream listing item.
pub fn remote_job(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "url": format!("https://remotive.com/remote-jobs/software-dev/job-{}", id),
        "title": title,
        "company_name": "Acme",
        "company_logo": format!("https://remotive.com/job/{}/logo", id),
        "category": "Software Development",
        "tags": ["rust", "backend"],
        "job_type": "full_time",
        "publication_date": "2024-05-01T12:34:56",
        "candidate_required_location": "Worldwide",
        "salary": "$120k - $150k",
        "description": "<p>Build reliable services.</p>"
    })
}

/// Fetch the stored ids, oldest first.
pub async fn stored_ids(pool: &PgPool) -> Result<Vec<i64>> {
    Ok(JobPosting::find_all(pool)
        .await?
        .into_iter()
        .map(|posting| posting.id)
        .collect())
}

/// Wait until `count` sessions in this database are queued on a
/// `job_postings` table lock.
pub async fn wait_for_blocked_writers(pool: &PgPool, count: i64) -> Result<()> {
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(10);

    loop {
        let waiting: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM pg_locks l
            JOIN pg_class c ON c.oid = l.relation
            WHERE c.relname = 'job_postings'
              AND l.database = (SELECT oid FROM pg_database WHERE datname = current_database())
              AND NOT l.granted
            "#,
        )
        .fetch_one(pool)
        .await?;

        if waiting >= count {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            anyhow::bail!("only {} of {} writers blocked on job_postings", waiting, count);
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
}
