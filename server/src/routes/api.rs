//! The read-only JSON API (`api2`).
//!
//! Record lists come back as pages with absolute next/previous links;
//! single records are embellished with their MSC ID, canonical URI, and
//! related entities (embedded one level deep). Relation triples are
//! exposed separately under `/api2/rel`.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use records::model::{Datatype, Record};
use records::mscid::{MSCID_PREFIX, MscId, Series};

use crate::routes::pages::catalog_error_to_status;
use crate::services::record::CatalogError;
use crate::services::{datatype, record, relation};
use crate::state::AppState;

pub const API_VERSION: &str = "2.0.0";
const DEFAULT_PAGE_SIZE: usize = 10;

fn base_url() -> String {
    std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into())
}

fn internal(err: &CatalogError) -> StatusCode {
    catalog_error_to_status(err)
}

// =============================================================================
// PAGINATION
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub start: Option<usize>,
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

/// A resolved page request. `start_index` and `page_index` count from 1.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PageWindow {
    pub start_index: usize,
    pub page_index: usize,
    pub total_pages: usize,
    pub next_link: Option<String>,
    pub previous_link: Option<String>,
}

/// Resolve paging parameters against a collection size. `None` means the
/// requested window is out of range (a 404 at the route level). Item-offset
/// (`start`) and page-number (`page`) addressing produce matching links;
/// off-grid starts get an extra page so the tail stays reachable.
pub(crate) fn paginate(
    total: usize,
    page_size: usize,
    start: Option<usize>,
    page: Option<usize>,
    link: &str,
) -> Option<PageWindow> {
    let total_pages = total.div_ceil(page_size);

    let (start_index, page_index, by_page) = if let Some(start) = start {
        if start > total || start < 1 {
            return None;
        }
        (start, start / page_size + 1, false)
    } else if let Some(page) = page {
        if page > total_pages || page < 1 {
            return None;
        }
        ((page - 1) * page_size + 1, page, true)
    } else {
        (1, 1, false)
    };

    let mut total_pages = total_pages;
    if (start_index - 1) % page_size > 0 {
        total_pages += 1;
    }

    let (next_link, previous_link) = if by_page {
        let next = (page_index < total_pages)
            .then(|| format!("{link}?page={}&pageSize={page_size}", page_index + 1));
        let previous = (page_index > 1).then(|| format!("{link}?page={}&pageSize={page_size}", page_index - 1));
        (next, previous)
    } else {
        let next = (start_index + page_size <= total)
            .then(|| format!("{link}?start={}&pageSize={page_size}", start_index + page_size));
        let previous = (start_index > 1).then(|| {
            if start_index <= page_size {
                format!("{link}?start=1&pageSize={}", start_index - 1)
            } else {
                format!("{link}?start={}&pageSize={page_size}", start_index - page_size)
            }
        });
        (next, previous)
    };

    Some(PageWindow { start_index, page_index, total_pages, next_link, previous_link })
}

fn page_response(items: Vec<Value>, total: usize, page_size: usize, window: &PageWindow) -> Value {
    let mut data = Map::new();
    data.insert("itemsPerPage".to_owned(), json!(page_size));
    data.insert("currentItemCount".to_owned(), json!(items.len()));
    data.insert("startIndex".to_owned(), json!(window.start_index));
    data.insert("totalItems".to_owned(), json!(total));
    data.insert("pageIndex".to_owned(), json!(window.page_index));
    data.insert("totalPages".to_owned(), json!(window.total_pages));
    if let Some(next) = &window.next_link {
        data.insert("nextLink".to_owned(), json!(next));
    }
    if let Some(previous) = &window.previous_link {
        data.insert("previousLink".to_owned(), json!(previous));
    }
    data.insert("items".to_owned(), json!(items));
    json!({"apiVersion": API_VERSION, "data": data})
}

fn item_response(data: Value) -> Value {
    json!({"apiVersion": API_VERSION, "data": data})
}

// =============================================================================
// EMBELLISHMENT
// =============================================================================

fn record_uri(record: &Record) -> String {
    format!("{}/api2/{}{}", base_url(), record.series, record.number)
}

/// Add `mscid`, `uri`, and related-entity references to a record document.
async fn embellish(pool: &sqlx::PgPool, record: &Record) -> Result<Value, CatalogError> {
    let mut doc = serde_json::to_value(&record.fields)?;
    doc["mscid"] = json!(record.mscid().to_string());
    doc["uri"] = json!(record_uri(record));

    let relations = relation::related_records(pool, record).await?;
    let mut related = Vec::new();
    for (role, entries) in &relations {
        for entry in entries {
            related.push(json!({"id": entry.id.to_string(), "role": role}));
        }
    }
    if !related.is_empty() {
        doc["relatedEntities"] = json!(related);
    }
    Ok(doc)
}

/// Like [`embellish`], but each related entity also embeds its own
/// embellished document (one level deep; repeats are shared).
async fn embellish_with_embedded(pool: &sqlx::PgPool, record: &Record) -> Result<Value, CatalogError> {
    let mut doc = serde_json::to_value(&record.fields)?;
    doc["mscid"] = json!(record.mscid().to_string());
    doc["uri"] = json!(record_uri(record));

    let relations = relation::related_records(pool, record).await?;
    let mut seen: HashMap<String, Value> = HashMap::new();
    let mut related = Vec::new();
    for (role, entries) in &relations {
        for entry in entries {
            let id = entry.id.to_string();
            let data = if let Some(cached) = seen.get(&id) {
                cached.clone()
            } else {
                let full = match record::load(pool, entry.id.series, entry.id.number).await? {
                    Some(other) => embellish(pool, &other).await?,
                    None => Value::Null,
                };
                seen.insert(id.clone(), full.clone());
                full
            };
            related.push(json!({"id": id, "role": role, "data": data}));
        }
    }
    if !related.is_empty() {
        doc["relatedEntities"] = json!(related);
    }
    Ok(doc)
}

fn datatype_doc(term: &Datatype) -> Value {
    let mut doc = Map::new();
    if let Some(id) = &term.id {
        doc.insert("id".to_owned(), json!(id));
    }
    doc.insert("label".to_owned(), json!(term.label));
    doc.insert("mscid".to_owned(), json!(term.mscid().to_string()));
    doc.insert("uri".to_owned(), json!(format!("{}/api2/datatype{}", base_url(), term.number)));
    Value::Object(doc)
}

// =============================================================================
// KEY PARSING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiTable {
    Series(Series),
    Datatype,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiKey {
    List(ApiTable),
    Item(ApiTable, i32),
}

/// Split an `/api2/<key>` path segment into table and optional number:
/// `m` lists schemes, `m13` is one scheme, `datatype3` one vocabulary term.
pub(crate) fn parse_api_key(raw: &str) -> Option<ApiKey> {
    let split = raw.find(|c: char| c.is_ascii_digit()).unwrap_or(raw.len());
    let (letters, digits) = raw.split_at(split);

    let table = if letters == "datatype" {
        ApiTable::Datatype
    } else {
        ApiTable::Series(letters.parse::<Series>().ok()?)
    };

    if digits.is_empty() {
        return Some(ApiKey::List(table));
    }
    let number: i32 = digits.parse().ok()?;
    Some(ApiKey::Item(table, number))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api2/<table>[<number>]` — a page of records, or one record.
pub async fn get_table(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, StatusCode> {
    match parse_api_key(&raw).ok_or(StatusCode::NOT_FOUND)? {
        ApiKey::Item(ApiTable::Series(series), number) => {
            let record = record::load(&state.pool, series, number)
                .await
                .map_err(|e| internal(&e))?
                .ok_or(StatusCode::NOT_FOUND)?;
            let data = embellish_with_embedded(&state.pool, &record)
                .await
                .map_err(|e| internal(&e))?;
            Ok(Json(item_response(data)))
        }
        ApiKey::Item(ApiTable::Datatype, number) => {
            let term = datatype::load(&state.pool, number)
                .await
                .map_err(|e| internal(&e))?
                .ok_or(StatusCode::NOT_FOUND)?;
            Ok(Json(item_response(datatype_doc(&term))))
        }
        ApiKey::List(table) => {
            let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
            let link = format!("{}/api2/{raw}", base_url());

            match table {
                ApiTable::Series(series) => {
                    let all = record::list(&state.pool, series).await.map_err(|e| internal(&e))?;
                    let window = paginate(all.len(), page_size, query.start, query.page, &link)
                        .ok_or(StatusCode::NOT_FOUND)?;
                    let slice_end = (window.start_index - 1 + page_size).min(all.len());
                    let mut items = Vec::new();
                    for record in &all[window.start_index - 1..slice_end] {
                        items.push(embellish(&state.pool, record).await.map_err(|e| internal(&e))?);
                    }
                    Ok(Json(page_response(items, all.len(), page_size, &window)))
                }
                ApiTable::Datatype => {
                    let all = datatype::list(&state.pool).await.map_err(|e| internal(&e))?;
                    let window = paginate(all.len(), page_size, query.start, query.page, &link)
                        .ok_or(StatusCode::NOT_FOUND)?;
                    let slice_end = (window.start_index - 1 + page_size).min(all.len());
                    let items = all[window.start_index - 1..slice_end].iter().map(datatype_doc).collect();
                    Ok(Json(page_response(items, all.len(), page_size, &window)))
                }
            }
        }
    }
}

fn relation_doc(subject: &str, properties: &std::collections::BTreeMap<String, Vec<String>>) -> Value {
    let mut doc = Map::new();
    doc.insert("@id".to_owned(), json!(subject));
    for (predicate, objects) in properties {
        doc.insert(predicate.clone(), json!(objects));
    }
    let bare = subject.strip_prefix(MSCID_PREFIX).unwrap_or(subject);
    doc.insert("uri".to_owned(), json!(format!("{}/api2/rel/{bare}", base_url())));
    Value::Object(doc)
}

/// `GET /api2/rel` — a page of relation documents, one per subject.
pub async fn list_relations(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, StatusCode> {
    let all = relation::all_forward_triples(&state.pool)
        .await
        .map_err(|e| internal(&e))?;
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let link = format!("{}/api2/rel", base_url());
    let window = paginate(all.len(), page_size, query.start, query.page, &link).ok_or(StatusCode::NOT_FOUND)?;
    let slice_end = (window.start_index - 1 + page_size).min(all.len());
    let items = all[window.start_index - 1..slice_end]
        .iter()
        .map(|(subject, properties)| relation_doc(subject, properties))
        .collect();
    Ok(Json(page_response(items, all.len(), page_size, &window)))
}

/// `GET /api2/rel/<series><number>` — one record's forward relations.
pub async fn get_relation(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let id = MscId::parse_bare(&raw).map_err(|_| StatusCode::NOT_FOUND)?;
    let record = record::load(&state.pool, id.series, id.number)
        .await
        .map_err(|e| internal(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    let subject = record.mscid().to_string();
    let properties = relation::forward_triples(&state.pool, &subject)
        .await
        .map_err(|e| internal(&e))?;
    Ok(Json(item_response(relation_doc(&subject, &properties))))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
