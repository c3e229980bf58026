//! The relations triple store.
//!
//! Cross-references are (subject, predicate, object) rows over MSC IDs,
//! always stored in their forward direction; inverse relationship fields
//! query by object instead of subject. Reads come back in catalog order
//! (series letter, then number).

use std::collections::BTreeMap;

use records::model::Record;
use records::mscid::{MscId, sort_mscids};
use records::relations::{RelatedRecord, RelationMap, relation_fields};
use sqlx::{PgPool, Row};

use crate::services::record::{self, CatalogError};

/// Relation edits batched per subject: subject -> predicate -> objects.
pub type RelationUpdates = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Insert the given triples, ignoring ones already present.
///
/// # Errors
///
/// Returns a database error if a write fails.
pub async fn add(pool: &PgPool, updates: &RelationUpdates) -> Result<(), CatalogError> {
    for (subject, properties) in updates {
        for (predicate, objects) in properties {
            for object in objects {
                sqlx::query(
                    "INSERT INTO relations (subject, predicate, object) VALUES ($1, $2, $3)
                     ON CONFLICT DO NOTHING",
                )
                .bind(subject)
                .bind(predicate)
                .bind(object)
                .execute(pool)
                .await?;
            }
        }
    }
    Ok(())
}

/// Delete the given triples; absent ones are ignored.
///
/// # Errors
///
/// Returns a database error if a write fails.
pub async fn remove(pool: &PgPool, updates: &RelationUpdates) -> Result<(), CatalogError> {
    for (subject, properties) in updates {
        for (predicate, objects) in properties {
            for object in objects {
                sqlx::query("DELETE FROM relations WHERE subject = $1 AND predicate = $2 AND object = $3")
                    .bind(subject)
                    .bind(predicate)
                    .bind(object)
                    .execute(pool)
                    .await?;
            }
        }
    }
    Ok(())
}

/// MSC IDs of all objects related to `subject` via `predicate`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn objects(pool: &PgPool, subject: &str, predicate: &str) -> Result<Vec<String>, CatalogError> {
    let rows = sqlx::query("SELECT object FROM relations WHERE subject = $1 AND predicate = $2")
        .bind(subject)
        .bind(predicate)
        .fetch_all(pool)
        .await?;
    let mut ids: Vec<String> = rows.iter().map(|r| r.get("object")).collect();
    sort_mscids(&mut ids);
    Ok(ids)
}

/// MSC IDs of all subjects relating to `object` via `predicate`.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn subjects(pool: &PgPool, predicate: &str, object: &str) -> Result<Vec<String>, CatalogError> {
    let rows = sqlx::query("SELECT subject FROM relations WHERE predicate = $1 AND object = $2")
        .bind(predicate)
        .bind(object)
        .fetch_all(pool)
        .await?;
    let mut ids: Vec<String> = rows.iter().map(|r| r.get("subject")).collect();
    sort_mscids(&mut ids);
    Ok(ids)
}

/// The record's current selections per relationship field, as MSC ID
/// strings filtered to the field's target series (predicates like
/// `maintainer` are shared between schemes and tools).
///
/// # Errors
///
/// Returns a database error if a query fails.
pub async fn selections(pool: &PgPool, record: &Record) -> Result<BTreeMap<String, Vec<String>>, CatalogError> {
    let mscid = record.mscid().to_string();
    let mut out = BTreeMap::new();
    for field in relation_fields(record.series) {
        let mut ids = if field.inverse {
            subjects(pool, field.predicate, &mscid).await?
        } else {
            objects(pool, &mscid, field.predicate).await?
        };
        ids.retain(|id| MscId::parse(id).is_ok_and(|parsed| parsed.series == field.target));
        out.insert(field.name.to_owned(), ids);
    }
    Ok(out)
}

/// The record's relations map for display and the API: descriptor name to
/// related record stubs. Only non-empty lists are present, and references
/// to since-deleted records are dropped.
///
/// # Errors
///
/// Returns a database or document error.
pub async fn related_records(pool: &PgPool, record: &Record) -> Result<RelationMap, CatalogError> {
    let mut out = RelationMap::new();
    for (name, ids) in selections(pool, record).await? {
        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(related) = record::load_by_mscid(pool, &id).await? {
                entries.push(RelatedRecord { id: related.mscid(), name: related.name() });
            }
        }
        if !entries.is_empty() {
            out.insert(name, entries);
        }
    }
    Ok(out)
}

/// All forward triples of one subject, grouped by predicate.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn forward_triples(pool: &PgPool, subject: &str) -> Result<BTreeMap<String, Vec<String>>, CatalogError> {
    let rows = sqlx::query("SELECT predicate, object FROM relations WHERE subject = $1")
        .bind(subject)
        .fetch_all(pool)
        .await?;
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for row in &rows {
        out.entry(row.get("predicate")).or_default().push(row.get("object"));
    }
    for ids in out.values_mut() {
        sort_mscids(ids);
    }
    Ok(out)
}

/// Every subject in the relations table with its forward triples, in
/// catalog order. Feeds the relations listing of the JSON API.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn all_forward_triples(pool: &PgPool) -> Result<Vec<(String, BTreeMap<String, Vec<String>>)>, CatalogError> {
    let rows = sqlx::query("SELECT subject, predicate, object FROM relations")
        .fetch_all(pool)
        .await?;
    let mut grouped: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
    for row in &rows {
        grouped
            .entry(row.get("subject"))
            .or_default()
            .entry(row.get("predicate"))
            .or_default()
            .push(row.get("object"));
    }

    let mut subjects: Vec<String> = grouped.keys().cloned().collect();
    sort_mscids(&mut subjects);

    let mut out = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let mut properties = grouped.remove(&subject).unwrap_or_default();
        for ids in properties.values_mut() {
            sort_mscids(ids);
        }
        out.push((subject, properties));
    }
    Ok(out)
}
