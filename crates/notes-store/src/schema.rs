//! Schema definitions and migration utilities.
//!
//! The PostgreSQL backend keeps one table of JSONB documents keyed by note id.
//! The table name is configurable, so the DDL is rendered at runtime from a
//! validated `TableName`.

use std::fmt;

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Default table name for notes.
pub const DEFAULT_TABLE_NAME: &str = "sls-notes-backend";

/// Maximum identifier length accepted by PostgreSQL.
const MAX_IDENTIFIER_LEN: usize = 63;

/// A validated table name.
///
/// Only ASCII letters, digits, `_` and `-` are accepted, so the quoted form
/// can be spliced into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    /// Validate and wrap a table name.
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();
        if name.is_empty() || name.len() > MAX_IDENTIFIER_LEN {
            return Err(StoreError::ConfigError(format!(
                "table name must be 1 to {} characters, got {:?}",
                MAX_IDENTIFIER_LEN, name
            )));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::ConfigError(format!(
                "table name may only contain letters, digits, '_' and '-', got {:?}",
                name
            )));
        }
        Ok(Self(name))
    }

    /// The bare name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a double-quoted SQL identifier.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Default for TableName {
    fn default() -> Self {
        Self(DEFAULT_TABLE_NAME.to_string())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// DDL for the notes table.
pub fn create_table_sql(table: &TableName) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            note_id TEXT PRIMARY KEY,
            item JSONB NOT NULL
        )
        "#,
        table = table.quoted()
    )
}

/// Create the notes table if it does not exist.
///
/// Idempotent; safe to run on every start.
pub async fn run_migrations(pool: &PgPool, table: &TableName) -> StoreResult<()> {
    tracing::info!(table = %table, "Running database migrations...");

    sqlx::raw_sql(&create_table_sql(table))
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Notes table migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the notes table exists.
pub async fn is_schema_initialized(pool: &PgPool, table: &TableName) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = $1
        )
        "#,
    )
    .bind(table.as_str())
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
