//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container is shared by every test in a binary. Each test gets
//! its own freshly migrated database inside it, so record counts never leak
//! between tests running in parallel.

use anyhow::{Context, Result};
use axum::Router;
use server_core::server::build_app;
use sqlx::PgPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    server_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

static NEXT_DATABASE: AtomicUsize = AtomicUsize::new(0);

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let server_url = format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port);

        Ok(Self {
            server_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }

    /// Create and migrate a new, empty database.
    async fn fresh_database(&self) -> Result<PgPool> {
        let name = format!("jobs_test_{}", NEXT_DATABASE.fetch_add(1, Ordering::SeqCst));

        let admin = PgPool::connect(&format!("{}/postgres", self.server_url))
            .await
            .context("Failed to connect to Postgres admin database")?;
        sqlx::query(&format!("CREATE DATABASE {}", name))
            .execute(&admin)
            .await
            .with_context(|| format!("Failed to create database {}", name))?;
        admin.close().await;

        let pool = PgPool::connect(&format!("{}/{}", self.server_url, name))
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(pool)
    }
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = get_json(ctx.app(), "/jobs").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;
        let db_pool = infra.fresh_database().await?;

        Ok(Self { db_pool })
    }

    /// Router wired to this harness's database.
    pub fn app(&self) -> Router {
        build_app(self.db_pool.clone(), 10000, Duration::from_secs(120))
    }
}
