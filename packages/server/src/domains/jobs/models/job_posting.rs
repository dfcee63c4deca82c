use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// A job posting mirrored from the upstream listing.
///
/// `id` is the upstream identifier; `row_id` is our own surrogate key and is
/// never exposed over the API.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JobPosting {
    #[serde(skip)]
    pub row_id: i64,
    pub id: i64,
    pub url: Option<String>,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub job_type: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    pub candidate_required_location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new job posting
#[derive(Debug, Clone, Default)]
pub struct CreateJobPosting {
    /// `None` is passed through as NULL and rejected by the column constraint.
    pub id: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub job_type: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    pub candidate_required_location: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
}

impl JobPosting {
    /// Find the first stored posting with the given upstream id
    pub async fn find_by_external_id(id: i64, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM job_postings WHERE id = $1 ORDER BY row_id ASC LIMIT 1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Find all stored postings, oldest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let postings =
            sqlx::query_as::<_, Self>("SELECT * FROM job_postings ORDER BY row_id ASC")
                .fetch_all(pool)
                .await?;
        Ok(postings)
    }

    /// Count stored postings (duplicates included)
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert a new posting. Does not check for an existing row with the same id.
    pub async fn create(input: CreateJobPosting, pool: &PgPool) -> Result<Self> {
        let external_id = input.id;
        let posting = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO job_postings (
                id, url, title, company_name, company_logo, category, tags,
                job_type, publication_date, candidate_required_location, salary, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(input.id)
        .bind(input.url)
        .bind(input.title)
        .bind(input.company_name)
        .bind(input.company_logo)
        .bind(input.category)
        .bind(input.tags)
        .bind(input.job_type)
        .bind(input.publication_date)
        .bind(input.candidate_required_location)
        .bind(input.salary)
        .bind(input.description)
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to insert job posting {:?}", external_id))?;

        Ok(posting)
    }
}
