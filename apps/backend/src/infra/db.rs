use std::future::Future;
use std::process;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, RuntimeEnv};
use crate::error::AppError;

/// Get database engine name for logging
fn db_engine(db_kind: &DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    interval_ms,
                    error = %e,
                    "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn connect_options(url: &str, db_kind: &DbKind) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    match db_kind {
        // The in-memory database lives as long as its last connection.
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opt.min_connections(1).max_connections(4);
        }
        DbKind::Postgres => {
            opt.min_connections(1).max_connections(10);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opt
}

/// Connect without running migrations
pub async fn connect_db(
    runtime_env: RuntimeEnv,
    db_kind: &DbKind,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(runtime_env, db_kind)?;
    let opt = connect_options(&url, db_kind);

    // Postgres may still be starting; local SQLite never needs a retry.
    if matches!(db_kind, DbKind::Postgres) {
        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        AppError::config(format!("failed to connect to Postgres: {e}"))
                    })
                }
            },
            5,
            500,
        )
        .await
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to connect to SQLite: {e}")))
    }
}

/// Connect *and* bring the schema up to date.
pub async fn bootstrap_db(
    runtime_env: RuntimeEnv,
    db_kind: &DbKind,
) -> Result<DatabaseConnection, AppError> {
    info!(
        env = ?runtime_env,
        db_kind = ?db_kind,
        engine = db_engine(db_kind),
        pid = process::id(),
        "bootstrap=start"
    );

    let conn = connect_db(runtime_env, db_kind).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;

    info!("bootstrap=ready");
    Ok(conn)
}
