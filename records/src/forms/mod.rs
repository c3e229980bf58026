//! Edit-form model.
//!
//! The edit templates consume form objects; this module owns them. A form
//! can be populated three ways: blank (new record), from a stored record
//! plus its current relation selections, or from a submitted urlencoded
//! body. Validation accumulates per-field error messages which the
//! templates render next to each control.
//!
//! Wire names follow the established form contract: subform fields are
//! indexed (`locations-0-url`), list-of-string fields are indexed without a
//! suffix (`keywords-0`), and multi-selects repeat the bare name.

pub mod validate;

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::model::Record;
use crate::mscid::{MscId, Series};
use crate::relations::{RelationField, relation_fields};
use self::validate::{MSG_BAD_CHOICE, MSG_NOT_IN_THESAURUS, MSG_REQUIRED, email_or_url, w3c_date};

// =============================================================================
// FIELD PRIMITIVES
// =============================================================================

/// A single text control: its submitted value and any validation errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub errors: Vec<String>,
}

impl Field {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), errors: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn trimmed(&self) -> String {
        self.value.trim().to_owned()
    }
}

/// An option in a select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// A multi-select control with its candidate choices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiSelect {
    pub selected: Vec<String>,
    pub choices: Vec<Choice>,
    pub errors: Vec<String>,
}

impl MultiSelect {
    #[must_use]
    pub fn with_choices(choices: Vec<Choice>) -> Self {
        Self { selected: Vec::new(), choices, errors: Vec::new() }
    }

    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    fn validate_choices(&mut self) {
        for value in &self.selected {
            if !value.is_empty() && !self.choices.iter().any(|c| &c.value == value) {
                self.errors.push(MSG_BAD_CHOICE.to_owned());
                break;
            }
        }
    }
}

// =============================================================================
// SUBFORMS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationForm {
    pub url: Field,
    pub kind: Field,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleForm {
    pub title: Field,
    pub url: Field,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierForm {
    pub id: Field,
    pub scheme: Field,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceForm {
    pub prefix: Field,
    pub uri: Field,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreatorForm {
    pub full_name: Field,
    pub given_name: Field,
    pub family_name: Field,
}

/// One relation picker, tied to its descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationEntry {
    pub field: &'static RelationField,
    pub select: MultiSelect,
}

// =============================================================================
// CHOICE LISTS
// =============================================================================

/// Candidate values supplied by the data layer when building a form.
#[derive(Clone, Debug, Default)]
pub struct FormChoices {
    /// Thesaurus term labels for the keywords datalist.
    pub keywords: Vec<String>,
    /// Data-type vocabulary terms (MSC ID, label).
    pub data_types: Vec<Choice>,
    /// Candidate related records per descriptor name (MSC ID, name).
    pub relations: BTreeMap<&'static str, Vec<Choice>>,
}

/// Location type choices offered for records of the given series.
/// Endorsement locations carry no selector; their type is fixed upstream.
#[must_use]
pub fn location_kinds(series: Series) -> &'static [(&'static str, &'static str)] {
    match series {
        Series::Scheme => &[
            ("document", "document"),
            ("website", "website"),
            ("RDA-MIG", "RDA MIG Schema"),
            ("DTD", "XML/SGML DTD"),
            ("XSD", "XML Schema"),
            ("RDFS", "RDF Schema"),
        ],
        Series::Organization => &[("website", "website"), ("email", "email address")],
        Series::Tool => &[
            ("website", "website"),
            ("document", "document"),
            ("application", "application"),
            ("service", "service"),
        ],
        Series::Crosswalk => &[("document", "document"), ("library", "code library"), ("executable", "executable")],
        Series::Endorsement => &[],
    }
}

// Which optional sections a series edits.
struct Sections {
    title: bool,
    name: bool,
    description: bool,
    citation: bool,
    dates: bool,
    keywords: bool,
    data_types: bool,
    samples: bool,
    namespaces: bool,
    creators: bool,
}

fn sections(series: Series) -> Sections {
    Sections {
        title: matches!(series, Series::Scheme | Series::Tool | Series::Endorsement),
        name: matches!(series, Series::Organization | Series::Crosswalk),
        description: series != Series::Endorsement,
        citation: series == Series::Endorsement,
        dates: series == Series::Endorsement,
        keywords: series == Series::Scheme,
        data_types: series == Series::Scheme,
        samples: series == Series::Scheme,
        namespaces: series == Series::Scheme,
        creators: series == Series::Crosswalk,
    }
}

// =============================================================================
// RECORD FORM
// =============================================================================

/// The edit form for a main-series record. Sections not used by the series
/// stay empty and are simply not rendered by that series' template.
#[derive(Clone, Debug)]
pub struct RecordForm {
    pub series: Series,
    pub title: Field,
    pub name: Field,
    pub description: Field,
    pub citation: Field,
    pub issued: Field,
    pub valid_from: Field,
    pub valid_to: Field,
    pub keywords: Vec<Field>,
    pub keyword_choices: Vec<String>,
    pub data_types: MultiSelect,
    pub locations: Vec<LocationForm>,
    pub samples: Vec<SampleForm>,
    pub identifiers: Vec<IdentifierForm>,
    pub namespaces: Vec<NamespaceForm>,
    pub creators: Vec<CreatorForm>,
    pub relations: Vec<RelationEntry>,
    /// JSON snapshot of the relation selections the form was built from;
    /// round-tripped through a hidden control so saves can diff against the
    /// state the editor actually saw.
    pub old_relations: String,
}

impl RecordForm {
    /// An empty form for a new record.
    #[must_use]
    pub fn blank(series: Series, choices: &FormChoices) -> Self {
        let mut form = Self::empty(series, choices, None);
        form.ensure_min_entries();
        form
    }

    /// Populate from a stored record. `keywords` must already be translated
    /// from URIs to labels, and `selections` holds the record's current
    /// relation selections per descriptor name.
    #[must_use]
    pub fn from_record(
        record: &Record,
        keywords: Vec<String>,
        selections: &BTreeMap<String, Vec<String>>,
        choices: &FormChoices,
    ) -> Self {
        let self_id = (record.number != 0).then(|| record.mscid());
        let mut form = Self::empty(record.series, choices, self_id);
        let fields = &record.fields;

        form.title = Field::new(fields.title.clone().unwrap_or_default());
        form.name = Field::new(fields.name.clone().unwrap_or_default());
        form.description = Field::new(fields.description.clone().unwrap_or_default());
        form.citation = Field::new(fields.citation.clone().unwrap_or_default());
        form.issued = Field::new(fields.issued.clone().unwrap_or_default());
        form.valid_from = Field::new(fields.valid_from.clone().unwrap_or_default());
        form.valid_to = Field::new(fields.valid_to.clone().unwrap_or_default());
        form.keywords = keywords.into_iter().map(Field::new).collect();
        form.data_types.selected = fields.data_types.clone();
        form.locations = fields
            .locations
            .iter()
            .map(|l| LocationForm { url: Field::new(&l.url), kind: Field::new(&l.kind) })
            .collect();
        form.samples = fields
            .samples
            .iter()
            .map(|s| SampleForm { title: Field::new(&s.title), url: Field::new(&s.url) })
            .collect();
        form.identifiers = fields
            .identifiers
            .iter()
            .map(|i| IdentifierForm { id: Field::new(&i.id), scheme: Field::new(&i.scheme) })
            .collect();
        form.namespaces = fields
            .namespaces
            .iter()
            .map(|n| NamespaceForm { prefix: Field::new(&n.prefix), uri: Field::new(&n.uri) })
            .collect();
        form.creators = fields
            .creators
            .iter()
            .map(|c| CreatorForm {
                full_name: Field::new(&c.full_name),
                given_name: Field::new(&c.given_name),
                family_name: Field::new(&c.family_name),
            })
            .collect();

        for entry in &mut form.relations {
            if let Some(selected) = selections.get(entry.field.name) {
                entry.select.selected = selected.clone();
            }
        }
        form.old_relations = serde_json::to_string(selections).unwrap_or_else(|_| "{}".to_owned());

        form.ensure_min_entries();
        form
    }

    /// Populate from submitted key/value pairs.
    #[must_use]
    pub fn from_pairs(
        series: Series,
        pairs: &[(String, String)],
        choices: &FormChoices,
        self_id: Option<MscId>,
    ) -> Self {
        let mut form = Self::empty(series, choices, self_id);

        form.title = Field::new(single(pairs, "title"));
        form.name = Field::new(single(pairs, "name"));
        form.description = Field::new(single(pairs, "description"));
        form.citation = Field::new(single(pairs, "citation"));
        form.issued = Field::new(single(pairs, "issued"));
        form.valid_from = Field::new(single(pairs, "valid_from"));
        form.valid_to = Field::new(single(pairs, "valid_to"));
        form.keywords = indexed_values(pairs, "keywords").into_iter().map(Field::new).collect();
        form.data_types.selected = repeated(pairs, "dataTypes");
        form.locations = indexed_groups(pairs, "locations")
            .into_iter()
            .map(|g| LocationForm { url: Field::new(group_value(&g, "url")), kind: Field::new(group_value(&g, "type")) })
            .collect();
        form.samples = indexed_groups(pairs, "samples")
            .into_iter()
            .map(|g| SampleForm { title: Field::new(group_value(&g, "title")), url: Field::new(group_value(&g, "url")) })
            .collect();
        form.identifiers = indexed_groups(pairs, "identifiers")
            .into_iter()
            .map(|g| IdentifierForm { id: Field::new(group_value(&g, "id")), scheme: Field::new(group_value(&g, "scheme")) })
            .collect();
        form.namespaces = indexed_groups(pairs, "namespaces")
            .into_iter()
            .map(|g| NamespaceForm {
                prefix: Field::new(group_value(&g, "prefix")),
                uri: Field::new(group_value(&g, "uri")),
            })
            .collect();
        form.creators = indexed_groups(pairs, "creators")
            .into_iter()
            .map(|g| CreatorForm {
                full_name: Field::new(group_value(&g, "fullName")),
                given_name: Field::new(group_value(&g, "givenName")),
                family_name: Field::new(group_value(&g, "familyName")),
            })
            .collect();

        for entry in &mut form.relations {
            let mut selected = repeated(pairs, entry.field.name);
            selected.retain(|v| !v.is_empty());
            entry.select.selected = selected;
        }
        form.old_relations = single(pairs, "old_relations");

        form.ensure_min_entries();
        form
    }

    fn empty(series: Series, choices: &FormChoices, self_id: Option<MscId>) -> Self {
        let self_mscid = self_id.map(|id| id.to_string());
        let relations = relation_fields(series)
            .iter()
            .map(|field| {
                let mut candidates = choices.relations.get(field.name).cloned().unwrap_or_default();
                if let Some(own) = &self_mscid {
                    candidates.retain(|c| &c.value != own);
                }
                RelationEntry { field, select: MultiSelect::with_choices(candidates) }
            })
            .collect();

        Self {
            series,
            title: Field::default(),
            name: Field::default(),
            description: Field::default(),
            citation: Field::default(),
            issued: Field::default(),
            valid_from: Field::default(),
            valid_to: Field::default(),
            keywords: Vec::new(),
            keyword_choices: choices.keywords.clone(),
            data_types: MultiSelect::with_choices(choices.data_types.clone()),
            locations: Vec::new(),
            samples: Vec::new(),
            identifiers: Vec::new(),
            namespaces: Vec::new(),
            creators: Vec::new(),
            relations,
            old_relations: String::new(),
        }
    }

    // Every active list section presents at least one (possibly blank) entry,
    // and a filled list gets a trailing blank for appending.
    fn ensure_min_entries(&mut self) {
        let active = sections(self.series);
        if active.keywords {
            if self.keywords.last().is_none_or(|f| !f.is_empty()) {
                self.keywords.push(Field::default());
            }
        } else {
            self.keywords.clear();
        }

        if self.locations.last().is_none_or(|l| !l.url.is_empty() || !l.kind.is_empty()) {
            self.locations.push(LocationForm::default());
        }
        if self.identifiers.last().is_none_or(|i| !i.id.is_empty() || !i.scheme.is_empty()) {
            self.identifiers.push(IdentifierForm::default());
        }

        if active.samples {
            if self.samples.last().is_none_or(|s| !s.title.is_empty() || !s.url.is_empty()) {
                self.samples.push(SampleForm::default());
            }
        } else {
            self.samples.clear();
        }
        if active.namespaces {
            if self.namespaces.last().is_none_or(|n| !n.prefix.is_empty() || !n.uri.is_empty()) {
                self.namespaces.push(NamespaceForm::default());
            }
        } else {
            self.namespaces.clear();
        }
        if active.creators {
            if self
                .creators
                .last()
                .is_none_or(|c| !c.full_name.is_empty() || !c.given_name.is_empty() || !c.family_name.is_empty())
            {
                self.creators.push(CreatorForm::default());
            }
        } else {
            self.creators.clear();
        }
    }

    /// Run all validators, recording errors on the offending fields.
    pub fn validate(&mut self) {
        for field in [&mut self.issued, &mut self.valid_from, &mut self.valid_to] {
            if !field.is_empty() {
                if let Err(msg) = w3c_date(&field.value) {
                    field.errors.push(msg);
                }
            }
        }

        for keyword in &mut self.keywords {
            if !keyword.is_empty() && !self.keyword_choices.contains(&keyword.trimmed()) {
                keyword.errors.push(MSG_NOT_IN_THESAURUS.to_owned());
            }
        }

        self.data_types.validate_choices();
        for entry in &mut self.relations {
            entry.select.validate_choices();
        }

        let has_kind_selector = !location_kinds(self.series).is_empty();
        for location in &mut self.locations {
            if location.url.is_empty() {
                if !location.kind.is_empty() {
                    location.url.errors.push(MSG_REQUIRED.to_owned());
                }
            } else if let Err(msg) = email_or_url(&location.url.trimmed()) {
                location.url.errors.push(msg);
            }
            if has_kind_selector && location.kind.is_empty() && !location.url.is_empty() {
                location.kind.errors.push(MSG_REQUIRED.to_owned());
            }
        }

        for sample in &mut self.samples {
            if sample.url.is_empty() {
                if !sample.title.is_empty() {
                    sample.url.errors.push(MSG_REQUIRED.to_owned());
                }
            } else {
                if let Err(msg) = email_or_url(&sample.url.trimmed()) {
                    sample.url.errors.push(msg);
                }
                if sample.title.is_empty() {
                    sample.title.errors.push(MSG_REQUIRED.to_owned());
                }
            }
        }
    }

    /// Number of top-level fields carrying at least one error; drives the
    /// singular/plural flash message.
    #[must_use]
    pub fn error_count(&self) -> usize {
        let mut count = 0;
        for field in [
            &self.title,
            &self.name,
            &self.description,
            &self.citation,
            &self.issued,
            &self.valid_from,
            &self.valid_to,
        ] {
            if field.has_errors() {
                count += 1;
            }
        }
        if self.keywords.iter().any(Field::has_errors) {
            count += 1;
        }
        if !self.data_types.errors.is_empty() {
            count += 1;
        }
        if self.locations.iter().any(|l| l.url.has_errors() || l.kind.has_errors()) {
            count += 1;
        }
        if self.samples.iter().any(|s| s.title.has_errors() || s.url.has_errors()) {
            count += 1;
        }
        if self.identifiers.iter().any(|i| i.id.has_errors() || i.scheme.has_errors()) {
            count += 1;
        }
        if self.namespaces.iter().any(|n| n.prefix.has_errors() || n.uri.has_errors()) {
            count += 1;
        }
        if self
            .creators
            .iter()
            .any(|c| c.full_name.has_errors() || c.given_name.has_errors() || c.family_name.has_errors())
        {
            count += 1;
        }
        count += self.relations.iter().filter(|e| !e.select.errors.is_empty()).count();
        count
    }

    /// Build the record document from the form values. Keywords come out as
    /// labels (the caller translates them to term URIs), relations are not
    /// included, and endorsement locations get their fixed `document` type.
    #[must_use]
    pub fn to_document(&self) -> Value {
        let active = sections(self.series);
        let mut doc = Map::new();
        if active.title {
            doc.insert("title".to_owned(), json!(self.title.trimmed()));
        }
        if active.name {
            doc.insert("name".to_owned(), json!(self.name.trimmed()));
        }
        if active.description {
            doc.insert("description".to_owned(), json!(self.description.value.trim()));
        }
        if active.citation {
            doc.insert("citation".to_owned(), json!(self.citation.trimmed()));
        }
        if active.dates {
            doc.insert("issued".to_owned(), json!(self.issued.trimmed()));
            doc.insert("valid_from".to_owned(), json!(self.valid_from.trimmed()));
            doc.insert("valid_to".to_owned(), json!(self.valid_to.trimmed()));
        }
        if active.keywords {
            let keywords: Vec<String> = self.keywords.iter().filter(|k| !k.is_empty()).map(Field::trimmed).collect();
            doc.insert("keywords".to_owned(), json!(keywords));
        }
        if active.data_types {
            doc.insert("dataTypes".to_owned(), json!(self.data_types.selected));
        }

        let locations: Vec<Value> = self
            .locations
            .iter()
            .filter(|l| !l.url.is_empty())
            .map(|l| {
                let kind = if self.series == Series::Endorsement { "document".to_owned() } else { l.kind.trimmed() };
                json!({"url": l.url.trimmed(), "type": kind})
            })
            .collect();
        doc.insert("locations".to_owned(), json!(locations));

        if active.samples {
            let samples: Vec<Value> = self
                .samples
                .iter()
                .filter(|s| !s.title.is_empty() || !s.url.is_empty())
                .map(|s| json!({"title": s.title.trimmed(), "url": s.url.trimmed()}))
                .collect();
            doc.insert("samples".to_owned(), json!(samples));
        }

        let identifiers: Vec<Value> = self
            .identifiers
            .iter()
            .filter(|i| !i.id.is_empty() || !i.scheme.is_empty())
            .map(|i| json!({"id": i.id.trimmed(), "scheme": i.scheme.trimmed()}))
            .collect();
        doc.insert("identifiers".to_owned(), json!(identifiers));

        if active.namespaces {
            let namespaces: Vec<Value> = self
                .namespaces
                .iter()
                .filter(|n| !n.prefix.is_empty() || !n.uri.is_empty())
                .map(|n| json!({"prefix": n.prefix.trimmed(), "uri": n.uri.trimmed()}))
                .collect();
            doc.insert("namespaces".to_owned(), json!(namespaces));
        }
        if active.creators {
            let creators: Vec<Value> = self
                .creators
                .iter()
                .filter(|c| !c.full_name.is_empty() || !c.given_name.is_empty() || !c.family_name.is_empty())
                .map(|c| {
                    json!({
                        "fullName": c.full_name.trimmed(),
                        "givenName": c.given_name.trimmed(),
                        "familyName": c.family_name.trimmed(),
                    })
                })
                .collect();
            doc.insert("creators".to_owned(), json!(creators));
        }

        Value::Object(doc)
    }

    /// Current relation selections, keyed by descriptor name.
    #[must_use]
    pub fn relation_selections(&self) -> BTreeMap<String, Vec<String>> {
        self.relations
            .iter()
            .map(|entry| (entry.field.name.to_owned(), entry.select.selected.clone()))
            .collect()
    }

    /// The selections snapshot the form was built from, if it parses.
    #[must_use]
    pub fn old_relation_selections(&self) -> Option<BTreeMap<String, Vec<String>>> {
        serde_json::from_str(&self.old_relations).ok()
    }
}

// =============================================================================
// DATATYPE FORM
// =============================================================================

/// Edit form for a data-type vocabulary term.
#[derive(Clone, Debug, Default)]
pub struct DatatypeForm {
    pub id: Field,
    pub label: Field,
    /// Labels already taken; populated only when creating a new term.
    pub used_labels: Vec<String>,
}

impl DatatypeForm {
    #[must_use]
    pub fn from_datatype(datatype: &crate::model::Datatype) -> Self {
        Self {
            id: Field::new(datatype.id.clone().unwrap_or_default()),
            label: Field::new(&datatype.label),
            used_labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self { id: Field::new(single(pairs, "id")), label: Field::new(single(pairs, "label")), used_labels: Vec::new() }
    }

    pub fn validate(&mut self) {
        if self.label.is_empty() {
            self.label.errors.push(MSG_REQUIRED.to_owned());
        } else if self.used_labels.contains(&self.label.trimmed()) {
            self.label
                .errors
                .push("That descriptor is already in use. Please make it distinct in some way.".to_owned());
        }
        if !self.id.is_empty() {
            if let Err(msg) = email_or_url(&self.id.trimmed()) {
                self.id.errors.push(msg);
            }
        }
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        [&self.id, &self.label].into_iter().filter(|f| f.has_errors()).count()
    }

    #[must_use]
    pub fn to_document(&self) -> Value {
        json!({"id": self.id.trimmed(), "label": self.label.trimmed()})
    }
}

// =============================================================================
// WIRE DECODING
// =============================================================================

fn single(pairs: &[(String, String)], name: &str) -> String {
    pairs
        .iter()
        .find(|(key, _)| key.as_str() == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

fn repeated(pairs: &[(String, String)], name: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key.as_str() == name)
        .map(|(_, value)| value.clone())
        .collect()
}

// keywords-0, keywords-1, ... in index order.
fn indexed_values(pairs: &[(String, String)], prefix: &str) -> Vec<String> {
    let mut found: BTreeMap<usize, String> = BTreeMap::new();
    for (key, value) in pairs {
        let Some(rest) = key.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
            continue;
        };
        if let Ok(index) = rest.parse::<usize>() {
            found.entry(index).or_insert_with(|| value.clone());
        }
    }
    found.into_values().collect()
}

// locations-0-url, locations-0-type, locations-1-url, ... grouped by index.
fn indexed_groups(pairs: &[(String, String)], prefix: &str) -> Vec<BTreeMap<String, String>> {
    let mut found: BTreeMap<usize, BTreeMap<String, String>> = BTreeMap::new();
    for (key, value) in pairs {
        let Some(rest) = key.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
            continue;
        };
        let Some((index_part, field_name)) = rest.split_once('-') else {
            continue;
        };
        if let Ok(index) = index_part.parse::<usize>() {
            found
                .entry(index)
                .or_default()
                .entry(field_name.to_owned())
                .or_insert_with(|| value.clone());
        }
    }
    found.into_values().collect()
}

fn group_value(group: &BTreeMap<String, String>, name: &str) -> String {
    group.get(name).cloned().unwrap_or_default()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
