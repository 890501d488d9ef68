//! Typed resources for the translation platform.
//!
//! Strongly typed calls layered over the HTTP client and the streaming
//! walker: communities, the projects inside them, uploaded documents,
//! and per-document translations.

mod communities;
mod documents;
mod projects;
mod types;

pub use types::{
    Action, Community, CommunityProperties, Document, DocumentProperties, Field, Locale,
    LocaleProperties, Project, ProjectProperties, Status, StatusCount, StatusCountPart,
    StatusProperties, Timestamp, Translation, TranslationProperties,
};

use crate::error::{Error, Result};

/// Rejects an empty resource identifier before any request is issued.
pub(crate) fn ensure_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::IdRequired);
    }
    Ok(())
}
