//! HTML page routes: home, record display, record and data-type editing.
//!
//! Handlers assemble everything a template consumes — the record, its
//! annotated versions, the relations map, form objects with choices — then
//! render the matching page inside the shell. Keywords are translated
//! between term URIs (storage) and labels (display/editing) at this
//! boundary.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;

use records::forms::{DatatypeForm, FormChoices, RecordForm};
use records::model::Record;
use records::mscid::{MscId, Series};
use records::relations::{RelationMap, relation_fields};
use records::versions::{AnnotatedVersion, annotate_versions};

use views::document;
use views::layout::{Flash, Shell};
use views::pages::edit_datatype::EditDatatypePage;
use views::pages::edit_endorsement::EditEndorsementPage;
use views::pages::edit_mapping::EditMappingPage;
use views::pages::edit_organization::EditOrganizationPage;
use views::pages::edit_scheme::EditSchemePage;
use views::pages::edit_tool::EditToolPage;
use views::pages::endorsement::EndorsementPage;
use views::pages::home::{HomePage, SeriesListing};
use views::pages::mapping::MappingPage;
use views::pages::organization::OrganizationPage;
use views::pages::scheme::SchemePage;
use views::pages::tool::ToolPage;
use views::urls;

use crate::routes::auth::{MaybeUser, RequireUser};
use crate::routes::flash;
use crate::services::record::CatalogError;
use crate::services::{datatype, form_save, record, relation};
use crate::state::AppState;

pub(crate) fn catalog_error_to_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Database(e) => {
            tracing::error!(error = %e, "database error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        CatalogError::Malformed(e) => {
            tracing::error!(error = %e, "malformed record document");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn internal(err: &CatalogError) -> StatusCode {
    catalog_error_to_status(err)
}

// =============================================================================
// HOME
// =============================================================================

/// `GET /` — the catalog contents by series.
pub async fn home(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> Result<Response, StatusCode> {
    let mut listings = Vec::with_capacity(Series::ALL.len());
    for series in Series::ALL {
        let entries = record::stubs(&state.pool, series).await.map_err(|e| internal(&e))?;
        listings.push(SeriesListing { series, entries });
    }

    let (jar, flashes) = flash::take(jar);
    let user_name = user.map(|u| u.name);
    let body = document(view! {
        <Shell title="Home".to_owned() user=user_name flashes=flashes>
            <HomePage listings=listings/>
        </Shell>
    });
    Ok((jar, Html(body)).into_response())
}

// =============================================================================
// DISPLAY
// =============================================================================

/// `GET /msc/<series><number>` — record display page.
pub async fn display(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(raw): Path<String>,
    jar: CookieJar,
) -> Result<Response, StatusCode> {
    let id = MscId::parse_bare(&raw).map_err(|_| StatusCode::NOT_FOUND)?;
    let mut record = record::load(&state.pool, id.series, id.number)
        .await
        .map_err(|e| internal(&e))?
        .ok_or(StatusCode::NOT_FOUND)?;

    // Stored keywords are term URIs; the page shows labels.
    let keyword_uris = std::mem::take(&mut record.fields.keywords);
    record.fields.keywords = keyword_uris
        .iter()
        .filter_map(|uri| {
            let label = state.thesaurus.label(uri);
            if label.is_none() {
                tracing::debug!(%uri, "keyword has no label in the thesaurus");
            }
            label.map(str::to_owned)
        })
        .collect();

    let versions = annotate_versions(&record.fields.versions);
    let data_type_labels = datatype::labels_for(&state.pool, &record.fields.data_types)
        .await
        .map_err(|e| internal(&e))?;
    let relations = relation::related_records(&state.pool, &record)
        .await
        .map_err(|e| internal(&e))?;

    let (jar, flashes) = flash::take(jar);
    let user_name = user.map(|u| u.name);
    let can_edit = user_name.is_some();
    let body = render_display_page(record, versions, relations, data_type_labels, user_name, flashes, can_edit);
    Ok((jar, Html(body)).into_response())
}

#[allow(clippy::too_many_arguments)]
fn render_display_page(
    record: Record,
    versions: Vec<AnnotatedVersion>,
    relations: RelationMap,
    data_type_labels: Vec<String>,
    user: Option<String>,
    flashes: Vec<Flash>,
    can_edit: bool,
) -> String {
    let title = record.name();
    match record.series {
        Series::Scheme => document(view! {
            <Shell title=title user=user flashes=flashes>
                <SchemePage
                    record=record
                    versions=versions
                    relations=relations
                    data_type_labels=data_type_labels
                    can_edit=can_edit
                />
            </Shell>
        }),
        Series::Organization => document(view! {
            <Shell title=title user=user flashes=flashes>
                <OrganizationPage record=record relations=relations can_edit=can_edit/>
            </Shell>
        }),
        Series::Tool => document(view! {
            <Shell title=title user=user flashes=flashes>
                <ToolPage record=record versions=versions relations=relations can_edit=can_edit/>
            </Shell>
        }),
        Series::Crosswalk => document(view! {
            <Shell title=title user=user flashes=flashes>
                <MappingPage record=record relations=relations can_edit=can_edit/>
            </Shell>
        }),
        Series::Endorsement => document(view! {
            <Shell title=title user=user flashes=flashes>
                <EndorsementPage record=record relations=relations can_edit=can_edit/>
            </Shell>
        }),
    }
}

// =============================================================================
// EDIT
// =============================================================================

/// What `/edit/<id>` points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditTarget {
    Record(Series, i32),
    Datatype(i32),
}

pub(crate) fn parse_edit_target(raw: &str) -> Option<EditTarget> {
    if let Some(digits) = raw.strip_prefix("datatype") {
        let number: i32 = digits.parse().ok()?;
        return Some(EditTarget::Datatype(number));
    }
    MscId::parse_bare(raw)
        .ok()
        .map(|id| EditTarget::Record(id.series, id.number))
}

/// Singular/plural flash used when validation fails.
pub(crate) fn save_error_flash(count: usize) -> String {
    if count == 1 {
        "Could not save changes as there was an error. See below for details.".to_owned()
    } else {
        format!("Could not save changes as there were {count} errors. See below for details.")
    }
}

const MISSING_RECORD_FLASH: &str =
    "You are trying to update a record that doesn't exist. Try filling out this new one instead.";

async fn build_choices(state: &AppState, series: Series) -> Result<FormChoices, CatalogError> {
    let mut choices = FormChoices {
        keywords: if series == Series::Scheme { state.thesaurus.choices() } else { Vec::new() },
        data_types: if series == Series::Scheme { datatype::choices(&state.pool).await? } else { Vec::new() },
        relations: std::collections::BTreeMap::new(),
    };
    for field in relation_fields(series) {
        let candidates = record::choices(&state.pool, field.target).await?;
        choices.relations.insert(field.name, candidates);
    }
    Ok(choices)
}

fn render_edit_page(
    series: Series,
    form: RecordForm,
    number: i32,
    user: Option<String>,
    flashes: Vec<Flash>,
) -> String {
    let title = format!("Edit {}", series.noun());
    match series {
        Series::Scheme => document(view! {
            <Shell title=title user=user flashes=flashes>
                <EditSchemePage form=form number=number/>
            </Shell>
        }),
        Series::Organization => document(view! {
            <Shell title=title user=user flashes=flashes>
                <EditOrganizationPage form=form number=number/>
            </Shell>
        }),
        Series::Tool => document(view! {
            <Shell title=title user=user flashes=flashes>
                <EditToolPage form=form number=number/>
            </Shell>
        }),
        Series::Crosswalk => document(view! {
            <Shell title=title user=user flashes=flashes>
                <EditMappingPage form=form number=number/>
            </Shell>
        }),
        Series::Endorsement => document(view! {
            <Shell title=title user=user flashes=flashes>
                <EditEndorsementPage form=form number=number/>
            </Shell>
        }),
    }
}

fn render_edit_datatype_page(form: DatatypeForm, number: i32, user: Option<String>, flashes: Vec<Flash>) -> String {
    document(view! {
        <Shell title="Edit data type".to_owned() user=user flashes=flashes>
            <EditDatatypePage form=form number=number/>
        </Shell>
    })
}

/// `GET /edit/<id>` — edit form, sign-in required.
pub async fn edit_form(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(raw): Path<String>,
    jar: CookieJar,
) -> Result<Response, StatusCode> {
    let target = parse_edit_target(&raw).ok_or(StatusCode::NOT_FOUND)?;

    match target {
        EditTarget::Datatype(number) => {
            let stored = if number == 0 {
                None
            } else {
                let loaded = datatype::load(&state.pool, number).await.map_err(|e| internal(&e))?;
                if loaded.is_none() {
                    let jar = flash::push(jar, "error", MISSING_RECORD_FLASH);
                    return Ok((jar, Redirect::to(&urls::edit_datatype_url(0))).into_response());
                }
                loaded
            };
            let mut form = stored
                .as_ref()
                .map(DatatypeForm::from_datatype)
                .unwrap_or_default();
            if number == 0 {
                form.used_labels = datatype::labels(&state.pool).await.map_err(|e| internal(&e))?;
            }
            let (jar, flashes) = flash::take(jar);
            let body = render_edit_datatype_page(form, number, Some(user.name), flashes);
            Ok((jar, Html(body)).into_response())
        }
        EditTarget::Record(series, number) => {
            let record = if number == 0 {
                Record::blank(series)
            } else {
                match record::load(&state.pool, series, number).await.map_err(|e| internal(&e))? {
                    Some(record) => record,
                    None => {
                        let jar = flash::push(jar, "error", MISSING_RECORD_FLASH);
                        return Ok((jar, Redirect::to(&urls::edit_url(series, 0))).into_response());
                    }
                }
            };

            let choices = build_choices(&state, series).await.map_err(|e| internal(&e))?;
            let selections = relation::selections(&state.pool, &record)
                .await
                .map_err(|e| internal(&e))?;
            // Keywords are edited as their long labels.
            let keywords = record
                .fields
                .keywords
                .iter()
                .filter_map(|uri| state.thesaurus.long_label(uri))
                .map(str::to_owned)
                .collect();
            let form = RecordForm::from_record(&record, keywords, &selections, &choices);

            let (jar, flashes) = flash::take(jar);
            let body = render_edit_page(series, form, number, Some(user.name), flashes);
            Ok((jar, Html(body)).into_response())
        }
    }
}

/// `POST /edit/<id>` — validate and save, or re-render with errors.
pub async fn edit_submit(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(raw): Path<String>,
    jar: CookieJar,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, StatusCode> {
    let target = parse_edit_target(&raw).ok_or(StatusCode::NOT_FOUND)?;

    match target {
        EditTarget::Datatype(number) => {
            if number != 0 && datatype::load(&state.pool, number).await.map_err(|e| internal(&e))?.is_none() {
                let jar = flash::push(jar, "error", MISSING_RECORD_FLASH);
                return Ok((jar, Redirect::to(&urls::edit_datatype_url(0))).into_response());
            }

            let mut form = DatatypeForm::from_pairs(&pairs);
            if number == 0 {
                form.used_labels = datatype::labels(&state.pool).await.map_err(|e| internal(&e))?;
            }
            form.validate();

            let errors = form.error_count();
            if errors > 0 {
                let flashes = vec![Flash::new("error", save_error_flash(errors))];
                let body = render_edit_datatype_page(form, number, Some(user.name), flashes);
                return Ok(Html(body).into_response());
            }

            match form_save::save_datatype_form(&state.pool, number, &form).await {
                Ok(_) => {
                    let message = if number == 0 { "Successfully added record." } else { "Successfully updated record." };
                    let jar = flash::push(jar, "success", message);
                    Ok((jar, Redirect::to("/")).into_response())
                }
                Err(e) => {
                    tracing::error!(error = %e, "data type save failed");
                    let jar = flash::push(jar, "error", "Could not save the record. Please try again.");
                    Ok((jar, Redirect::to(&urls::edit_datatype_url(number))).into_response())
                }
            }
        }
        EditTarget::Record(series, number) => {
            if number != 0 && record::load(&state.pool, series, number).await.map_err(|e| internal(&e))?.is_none() {
                let jar = flash::push(jar, "error", MISSING_RECORD_FLASH);
                return Ok((jar, Redirect::to(&urls::edit_url(series, 0))).into_response());
            }

            let choices = build_choices(&state, series).await.map_err(|e| internal(&e))?;
            let self_id = (number != 0).then(|| MscId::new(series, number));
            let mut form = RecordForm::from_pairs(series, &pairs, &choices, self_id);
            form.validate();

            let errors = form.error_count();
            if errors > 0 {
                let flashes = vec![Flash::new("error", save_error_flash(errors))];
                let body = render_edit_page(series, form, number, Some(user.name), flashes);
                return Ok(Html(body).into_response());
            }

            match form_save::save_record_form(&state.pool, &state.thesaurus, series, number, &form).await {
                Ok(saved_number) => {
                    let message = if number == 0 { "Successfully added record." } else { "Successfully updated record." };
                    let jar = flash::push(jar, "success", message);
                    let id = MscId::new(series, saved_number);
                    Ok((jar, Redirect::to(&urls::record_url(id))).into_response())
                }
                Err(e) => {
                    tracing::error!(error = %e, "record save failed");
                    let jar = flash::push(jar, "error", "Could not save the record. Please try again.");
                    Ok((jar, Redirect::to(&urls::edit_url(series, number))).into_response())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
