//! Record persistence.
//!
//! Records live in one `records` table keyed by (series, number) with the
//! document in jsonb. Numbers are assigned per series on first save,
//! starting at 1, so MSC IDs stay stable and dense.

use records::forms::Choice;
use records::model::{Record, RecordFields};
use records::mscid::{MscId, Series};
use records::relations::RelatedRecord;
use serde_json::Value;
use sqlx::{PgPool, Row};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("malformed record document: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn from_row(series: Series, number: i32, data: Value) -> Result<Record, CatalogError> {
    let fields: RecordFields = serde_json::from_value(data)?;
    Ok(Record { series, number, fields })
}

/// Load one record, or `None` if it does not exist.
///
/// # Errors
///
/// Returns a database or document error.
pub async fn load(pool: &PgPool, series: Series, number: i32) -> Result<Option<Record>, CatalogError> {
    let row = sqlx::query("SELECT data FROM records WHERE series = $1 AND number = $2")
        .bind(series.code().to_string())
        .bind(number)
        .fetch_optional(pool)
        .await?;

    row.map(|r| from_row(series, number, r.get("data"))).transpose()
}

/// Load a record addressed by MSC ID string; `None` when the ID is
/// malformed or the record is missing.
///
/// # Errors
///
/// Returns a database or document error.
pub async fn load_by_mscid(pool: &PgPool, mscid: &str) -> Result<Option<Record>, CatalogError> {
    let Ok(id) = MscId::parse(mscid) else {
        return Ok(None);
    };
    load(pool, id.series, id.number).await
}

/// All records of a series, in number order.
///
/// # Errors
///
/// Returns a database or document error.
pub async fn list(pool: &PgPool, series: Series) -> Result<Vec<Record>, CatalogError> {
    let rows = sqlx::query_as::<_, (i32, Value)>(
        "SELECT number, data FROM records WHERE series = $1 ORDER BY number",
    )
    .bind(series.code().to_string())
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(|(number, data)| from_row(series, number, data)).collect()
}

/// Insert or update a record document. Number 0 inserts with the next free
/// number for the series; anything else replaces the stored document.
/// Returns the record's number.
///
/// # Errors
///
/// Returns a database error if the write fails.
pub async fn save(pool: &PgPool, series: Series, number: i32, data: Value) -> Result<i32, CatalogError> {
    if number == 0 {
        let row = sqlx::query(
            "INSERT INTO records (series, number, data)
             SELECT $1, COALESCE(MAX(number), 0) + 1, $2 FROM records WHERE series = $1
             RETURNING number",
        )
        .bind(series.code().to_string())
        .bind(data)
        .fetch_one(pool)
        .await?;
        return Ok(row.get("number"));
    }

    let result = sqlx::query(
        "INSERT INTO records (series, number, data) VALUES ($1, $2, $3)
         ON CONFLICT (series, number) DO UPDATE SET data = EXCLUDED.data, updated_at = now()",
    )
    .bind(series.code().to_string())
    .bind(number)
    .bind(data)
    .execute(pool)
    .await?;
    debug_assert!(result.rows_affected() == 1);
    Ok(number)
}

/// (MSC ID, name) stubs for all records of a series, in number order.
///
/// # Errors
///
/// Returns a database or document error.
pub async fn stubs(pool: &PgPool, series: Series) -> Result<Vec<RelatedRecord>, CatalogError> {
    let entries = list(pool, series)
        .await?
        .into_iter()
        .map(|record| RelatedRecord { id: record.mscid(), name: record.name() })
        .collect();
    Ok(entries)
}

/// Relation-picker choices for a series, sorted by name
/// (case-insensitively) the way the pickers present them.
///
/// # Errors
///
/// Returns a database or document error.
pub async fn choices(pool: &PgPool, series: Series) -> Result<Vec<Choice>, CatalogError> {
    let mut entries = stubs(pool, series).await?;
    entries.sort_by_key(|entry| entry.name.to_lowercase());
    Ok(entries
        .into_iter()
        .map(|entry| Choice::new(entry.id.to_string(), entry.name))
        .collect())
}
