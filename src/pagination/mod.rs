//! Pagination module
//!
//! The hypermedia paging model: links, page envelopes, and cursor
//! resolution.
//!
//! # Overview
//!
//! Every collection response is a page envelope carrying `self` and `next`
//! links. The cursor resolver folds the links of the page just read into
//! the request for the page after it; [`crate::stream`] drives that
//! resolve/fetch cycle until a terminal condition is reached.

mod cursor;
mod envelope;
mod link;

pub use cursor::{next_request, CursorRequest, LIMIT_KEY, OFFSET_KEY};
pub use envelope::{PageEnvelope, PageSummary, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use link::{parse_query, Link, Relation};
