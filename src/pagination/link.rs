//! Hypermedia link model
//!
//! Every page names its own address and, while more pages exist, the next
//! one. Classification looks at the first rel tag only; servers emit rel
//! sets like `["self", "next"]` and the trailing tags carry no meaning here.

use crate::types::QueryMap;
use serde::{Deserialize, Serialize};

/// A hypermedia link as it appears on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    /// Relation tags; only the first is inspected
    #[serde(default)]
    pub rel: Vec<String>,
    /// Target reference, relative to the API root
    #[serde(default)]
    pub href: String,
}

/// The relation a link carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The page's own address (rel tag `self`)
    Current,
    /// The page after this one (rel tag `next`)
    Next,
    /// Anything else, ignored by pagination
    Other,
}

impl Link {
    /// Create a link with a single rel tag
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: vec![rel.into()],
            href: href.into(),
        }
    }

    /// Classify this link by its first rel tag
    pub fn relation(&self) -> Relation {
        match self.rel.first().map(String::as_str) {
            Some("self") => Relation::Current,
            Some("next") => Relation::Next,
            _ => Relation::Other,
        }
    }

    /// Split the href into its path and decoded query parameters
    pub fn target(&self) -> (String, QueryMap) {
        match self.href.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query(query)),
            None => (self.href.clone(), QueryMap::new()),
        }
    }
}

/// Decode a raw query string into a map. Percent and plus escapes are
/// decoded; duplicate keys keep the last value seen.
pub fn parse_query(query: &str) -> QueryMap {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
