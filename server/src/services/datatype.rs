//! Data-type vocabulary persistence.
//!
//! A small controlled vocabulary (`msc:datatype<n>`), referenced from
//! scheme records and offered as choices on the scheme edit form.

use records::forms::Choice;
use records::model::Datatype;
use records::mscid::DatatypeId;
use serde_json::Value;
use sqlx::{PgPool, Row};

use crate::services::record::CatalogError;

/// Load one vocabulary term, or `None` if it does not exist.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn load(pool: &PgPool, number: i32) -> Result<Option<Datatype>, CatalogError> {
    let row = sqlx::query("SELECT number, id, label FROM datatypes WHERE number = $1")
        .bind(number)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| Datatype { number: r.get("number"), id: r.get("id"), label: r.get("label") }))
}

/// All vocabulary terms, by number.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list(pool: &PgPool) -> Result<Vec<Datatype>, CatalogError> {
    let rows = sqlx::query("SELECT number, id, label FROM datatypes ORDER BY number")
        .fetch_all(pool)
        .await?;
    Ok(rows
        .iter()
        .map(|r| Datatype { number: r.get("number"), id: r.get("id"), label: r.get("label") })
        .collect())
}

/// (MSC ID, label) choices for the scheme form, sorted by label.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn choices(pool: &PgPool) -> Result<Vec<Choice>, CatalogError> {
    let mut terms = list(pool).await?;
    terms.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(terms
        .into_iter()
        .map(|term| Choice::new(term.mscid().to_string(), term.label))
        .collect())
}

/// All labels in use, sorted; feeds the uniqueness check on new terms.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn labels(pool: &PgPool) -> Result<Vec<String>, CatalogError> {
    let mut labels: Vec<String> = list(pool).await?.into_iter().map(|term| term.label).collect();
    labels.sort();
    Ok(labels)
}

/// Resolve stored `msc:datatype<n>` references into display labels,
/// dropping ones that no longer exist.
///
/// # Errors
///
/// Returns a database error if a query fails.
pub async fn labels_for(pool: &PgPool, mscids: &[String]) -> Result<Vec<String>, CatalogError> {
    let mut out = Vec::with_capacity(mscids.len());
    for raw in mscids {
        let Ok(id) = DatatypeId::parse(raw) else {
            tracing::debug!(mscid = %raw, "unparseable data type reference");
            continue;
        };
        if let Some(term) = load(pool, id.0).await? {
            out.push(term.label);
        }
    }
    Ok(out)
}

/// Insert or update a vocabulary term from its cleaned document. Returns
/// the term's number.
///
/// # Errors
///
/// Returns a database error if the write fails.
pub async fn save(pool: &PgPool, number: i32, doc: &Value) -> Result<i32, CatalogError> {
    let id = doc.get("id").and_then(Value::as_str);
    let label = doc.get("label").and_then(Value::as_str).unwrap_or_default();

    if number == 0 {
        let row = sqlx::query("INSERT INTO datatypes (id, label) VALUES ($1, $2) RETURNING number")
            .bind(id)
            .bind(label)
            .fetch_one(pool)
            .await?;
        return Ok(row.get("number"));
    }

    sqlx::query("UPDATE datatypes SET id = $2, label = $3 WHERE number = $1")
        .bind(number)
        .bind(id)
        .bind(label)
        .execute(pool)
        .await?;
    Ok(number)
}
