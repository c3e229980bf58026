pub mod auth;
pub mod datatype;
pub mod form_save;
pub mod record;
pub mod relation;
pub mod session;
pub mod thesaurus;
