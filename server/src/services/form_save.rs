//! Saving a validated edit form.
//!
//! The save flow mirrors what the editor saw: the record document is built
//! from the form values, the slug and the separately-managed version
//! history are re-attached from the stored record, keywords are translated
//! from thesaurus labels back to term URIs, and relation edits are applied
//! as a diff against the selections snapshot the form carried — so a
//! concurrent edit of an untouched field is not clobbered.

use std::collections::BTreeMap;

use records::forms::{DatatypeForm, RecordForm};
use records::model::{Record, cleanup, to_file_slug};
use records::mscid::{MscId, Series};
use records::relations::relation_fields;
use serde_json::{Value, json};
use sqlx::PgPool;

use crate::services::record::CatalogError;
use crate::services::relation::{self, RelationUpdates};
use crate::services::thesaurus::Thesaurus;
use crate::services::{datatype, record};

/// Relation edits to apply after a save.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RelationDiff {
    pub additions: RelationUpdates,
    pub deletions: RelationUpdates,
}

/// Diff the form's relation selections against the previous selections.
/// Forward fields edit triples under the record's own MSC ID; inverse
/// fields edit the triples of the records on the other end. Self-references
/// are discarded.
#[must_use]
pub fn diff_relations(
    series: Series,
    mscid: &str,
    selected: &BTreeMap<String, Vec<String>>,
    previous: &BTreeMap<String, Vec<String>>,
) -> RelationDiff {
    let mut diff = RelationDiff::default();
    let empty = Vec::new();

    for field in relation_fields(series) {
        let new_values: Vec<&String> = selected
            .get(field.name)
            .unwrap_or(&empty)
            .iter()
            .filter(|v| v.as_str() != mscid)
            .collect();
        let old_values: Vec<&String> = previous
            .get(field.name)
            .unwrap_or(&empty)
            .iter()
            .filter(|v| v.as_str() != mscid)
            .collect();

        if field.inverse {
            for subject in &new_values {
                if !old_values.contains(subject) {
                    push_update(&mut diff.additions, subject, field.predicate, mscid);
                }
            }
            for subject in &old_values {
                if !new_values.contains(subject) {
                    push_update(&mut diff.deletions, subject, field.predicate, mscid);
                }
            }
        } else {
            for object in &new_values {
                if !old_values.contains(object) {
                    push_update(&mut diff.additions, mscid, field.predicate, object);
                }
            }
            for object in &old_values {
                if !new_values.contains(object) {
                    push_update(&mut diff.deletions, mscid, field.predicate, object);
                }
            }
        }
    }

    diff
}

fn push_update(updates: &mut RelationUpdates, subject: &str, predicate: &str, object: &str) {
    updates
        .entry(subject.to_owned())
        .or_default()
        .entry(predicate.to_owned())
        .or_default()
        .push(object.to_owned());
}

/// Save a validated record form. Returns the record's number (freshly
/// assigned for new records).
///
/// # Errors
///
/// Returns a database or document error.
pub async fn save_record_form(
    pool: &PgPool,
    thesaurus: &Thesaurus,
    series: Series,
    number: i32,
    form: &RecordForm,
) -> Result<i32, CatalogError> {
    let stored = if number == 0 { None } else { record::load(pool, series, number).await? };

    let mut doc = form.to_document();

    // Keywords are edited as labels but stored as term URIs; unrecognized
    // entries were already rejected by validation.
    if let Some(keywords) = doc.get_mut("keywords") {
        let uris: Vec<String> = keywords
            .as_array()
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(|label| thesaurus.uri_for(label))
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        *keywords = json!(uris);
    }

    // The slug and version history are managed outside this form.
    let slug = stored
        .as_ref()
        .and_then(Record::slug)
        .or_else(|| derived_slug(&doc))
        .unwrap_or_default();
    doc["slug"] = json!(slug);
    if let Some(stored) = &stored {
        if !stored.fields.versions.is_empty() {
            doc["versions"] = serde_json::to_value(&stored.fields.versions)?;
        }
    }

    let doc = cleanup(doc);
    let saved_number = record::save(pool, series, number, doc).await?;
    let mscid = MscId::new(series, saved_number).to_string();

    // Previous selections: the form's snapshot where available, the
    // relations table otherwise (new records have neither).
    let previous = match form.old_relation_selections() {
        Some(snapshot) => snapshot,
        None => match &stored {
            Some(stored) => relation::selections(pool, stored).await?,
            None => BTreeMap::new(),
        },
    };

    let diff = diff_relations(series, &mscid, &form.relation_selections(), &previous);
    relation::add(pool, &diff.additions).await?;
    relation::remove(pool, &diff.deletions).await?;

    Ok(saved_number)
}

fn derived_slug(doc: &Value) -> Option<String> {
    let name = doc
        .get("title")
        .or_else(|| doc.get("name"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())?;
    Some(to_file_slug(name))
}

/// Save a validated data-type form. Returns the term's number.
///
/// # Errors
///
/// Returns a database error if the write fails.
pub async fn save_datatype_form(pool: &PgPool, number: i32, form: &DatatypeForm) -> Result<i32, CatalogError> {
    let doc = cleanup(form.to_document());
    datatype::save(pool, number, &doc).await
}

#[cfg(test)]
#[path = "form_save_test.rs"]
mod tests;
