//! Shared record model for the metadata standards catalog.
//!
//! This crate owns the domain vocabulary used by both `server` and `views`:
//! catalog identifiers, the heterogeneous record document, the static table
//! of cross-reference descriptors, version display annotation, and the form
//! model consumed by the edit templates. Everything here is pure data and
//! pure functions; persistence and rendering live in the other crates.

pub mod forms;
pub mod model;
pub mod mscid;
pub mod relations;
pub mod versions;

pub use model::{Creator, Datatype, Identifier, Location, Namespace, Record, RecordFields, Sample, Version, cleanup};
pub use mscid::{DatatypeId, IdError, MSCID_PREFIX, MscId, Series};
pub use relations::{RelatedRecord, RelationField, RelationMap, has_related_schemes, relation_fields};
pub use versions::{AnnotatedVersion, VersionStatus, annotate_versions};
