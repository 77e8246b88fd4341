//! Database initialization
//!
//! Creates the SQLite pool, applies the schema idempotently, and seeds the
//! crops reference table from the loaded datasets.

use std::path::Path;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::error::{AppError, AppResult};

/// Initialize the database connection pool and create tables if needed
pub async fn init_database(
    db_path: &Path,
    max_connections: u32,
    min_connections: u32,
) -> AppResult<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Configuration(e.to_string()))?;
        }
    }

    // mode=rwc creates the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .connect(&db_url)
        .await?;

    if newly_created {
        tracing::info!("Initialized new database: {}", db_path.display());
    } else {
        tracing::info!("Opened existing database: {}", db_path.display());
    }

    configure_connection(&pool).await?;
    create_schema(&pool).await?;

    Ok(pool)
}

/// Pool for tests: a single shared in-memory connection
#[cfg(test)]
pub async fn init_test_database() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    configure_connection(&pool).await.unwrap();
    create_schema(&pool).await.unwrap();
    pool
}

async fn configure_connection(pool: &SqlitePool) -> AppResult<()> {
    // Enforce the farmer/crop foreign keys on recommendations
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    // WAL allows concurrent readers while a store transaction commits
    sqlx::query("PRAGMA journal_mode = WAL").execute(pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(pool).await?;

    Ok(())
}

/// Create all tables (idempotent)
async fn create_schema(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS farmers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            farm_size REAL NOT NULL,
            soil_type TEXT NOT NULL,
            water_availability TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS crops (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recommendations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            farmer_id INTEGER NOT NULL REFERENCES farmers(id),
            crop_id INTEGER NOT NULL REFERENCES crops(id),
            sustainability_score REAL NOT NULL,
            profitability_score REAL NOT NULL,
            water_efficiency_score REAL NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Seed the crops reference table with names from the datasets (idempotent)
pub async fn seed_crops(pool: &SqlitePool, crop_names: &[String]) -> AppResult<()> {
    let mut names: Vec<&str> = crop_names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.dedup();

    for name in names {
        sqlx::query("INSERT OR IGNORE INTO crops (name) VALUES ($1)")
            .bind(name)
            .execute(pool)
            .await?;
    }

    Ok(())
}
