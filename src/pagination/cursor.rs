//! Cursor resolution
//!
//! Derives the request for the page after the one just read. The `self`
//! link contributes the path and any filter parameters; the `next` link
//! contributes the `offset` and `limit` cursor values. A page without a
//! `next` link ends the listing.

use super::envelope::PageEnvelope;
use super::link::Relation;
use crate::error::{Error, Result};
use crate::types::QueryMap;

/// Query key holding the page offset
pub const OFFSET_KEY: &str = "offset";
/// Query key holding the page size
pub const LIMIT_KEY: &str = "limit";

/// A resolved request for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorRequest {
    /// Path relative to the API root
    pub path: String,
    /// Query parameters to send
    pub query: QueryMap,
}

/// Resolve the request for the page after `envelope`.
///
/// Links are walked in order, so when a relation appears more than once the
/// last occurrence wins. A `next` link missing `offset` or `limit` yields
/// empty values for those keys; they are passed through unvalidated.
pub fn next_request(envelope: &PageEnvelope) -> Result<CursorRequest> {
    let mut request = CursorRequest::default();
    let mut found_next = false;

    for link in &envelope.links {
        match link.relation() {
            Relation::Current => {
                let (path, query) = link.target();
                request.path = path;
                for (key, value) in query {
                    if key != OFFSET_KEY && key != LIMIT_KEY {
                        request.query.insert(key, value);
                    }
                }
            }
            Relation::Next => {
                let (_, query) = link.target();
                request.query.insert(
                    OFFSET_KEY.to_string(),
                    query.get(OFFSET_KEY).cloned().unwrap_or_default(),
                );
                request.query.insert(
                    LIMIT_KEY.to_string(),
                    query.get(LIMIT_KEY).cloned().unwrap_or_default(),
                );
                found_next = true;
            }
            Relation::Other => {}
        }
    }

    if !found_next {
        return Err(Error::EndOfList);
    }

    Ok(request)
}
