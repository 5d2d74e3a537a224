//! hitlog demonstration binary.
//!
//! Seeds both tables with four sample rows each, prints them back, then
//! clears the tables and reports the removed-row counts. All logs go to
//! stderr; stdout carries only the printed records.

use hitlog::config::Config;
use hitlog::error::AppError;
use hitlog::storage::{SqliteStorage, StoredCalculation, StoredComment};

#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for record output)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("hitlog starting...");

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, pool={}",
        config.database_path,
        config.max_connections
    );

    if let Err(e) = run(&config).await {
        tracing::error!("Demo error: {e}");
        std::process::exit(1);
    }

    tracing::info!("hitlog shutdown complete");
}

/// Insert four sample rows per table, print everything back, clear both
/// tables.
async fn run(config: &Config) -> Result<(), AppError> {
    let storage = SqliteStorage::new(&config.database_path, config.max_connections).await?;

    for i in 0..4 {
        let accessed = chrono::Utc::now().to_rfc3339();
        storage
            .insert_calculation(&StoredCalculation::new(
                format!("page{i}"),
                accessed.clone(),
                format!("{}ms", 10 + i),
            ))
            .await?;
        storage
            .insert_comment(&StoredComment::new(
                format!("guest{i}"),
                accessed,
                "12:00",
                format!("comment {i}"),
            ))
            .await?;
    }

    for record in storage.list_calculations().await? {
        println!(
            "{},{},{}",
            record.name, record.access_time, record.elapsed_time
        );
    }
    for record in storage.list_comments().await? {
        println!(
            "{},{},{},{},{}",
            record.name, record.access_time, record.begin_time, record.content, record.posted_at
        );
    }

    let calculations_removed = storage.clear_calculations().await?;
    let comments_removed = storage.clear_comments().await?;
    tracing::info!(
        "Cleared {calculations_removed} calculation rows, {comments_removed} comment rows"
    );

    Ok(())
}
