// Main entry point for API server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use server_core::domains::jobs::run_ingestion;
use server_core::kernel::scheduled_tasks::start_scheduler;
use server_core::kernel::{BaseJobFeed, RemotiveJobFeed};
use server_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Remote Jobs Mirror API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Build application
    let app = build_app(
        pool.clone(),
        config.port,
        Duration::from_secs(config.request_timeout_secs),
    );

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Server is running on http://{}", addr);

    // Initial ingestion runs in the background once the listener is up
    let feed: Arc<dyn BaseJobFeed> = Arc::new(RemotiveJobFeed::from_url(&config.jobs_feed_url));
    {
        let feed = feed.clone();
        let pool = pool.clone();
        tokio::spawn(async move {
            run_ingestion(feed.as_ref(), &pool).await;
        });
    }

    let scheduler = match config.ingest_schedule.as_deref() {
        Some(schedule) => Some(
            start_scheduler(schedule, feed.clone(), pool.clone())
                .await
                .context("Failed to start ingestion scheduler")?,
        ),
        None => None,
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(mut scheduler) = scheduler {
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!(error = %e, "Failed to stop ingestion scheduler");
        }
    }

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
