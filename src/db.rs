//! SQLite pool construction and schema bootstrap.
//!
//! The schema is embedded and applied idempotently at startup; there is no
//! migration framework. `products.category_id` is a plain indexed column:
//! a product may reference a category id that no longer (or never) existed,
//! and list projections resolve its name to NULL via LEFT JOIN.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::errors::RepoResult;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        category_id INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_products_category_id ON products (category_id)",
];

/// Connect to the given SQLite URL, creating the file if needed, and apply
/// the schema.
pub async fn init_pool(url: &str) -> RepoResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    apply_schema(&pool).await?;
    Ok(pool)
}

/// Pool over a private in-memory database, for tests. The pool is pinned to
/// a single connection so the database outlives individual checkouts.
pub async fn init_memory_pool() -> RepoResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    apply_schema(&pool).await?;
    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> RepoResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
