//! Page envelope wire model
//!
//! Every collection response is a Siren-style envelope: a count summary
//! under `properties`, an opaque `entities` block the resource layer decodes
//! later, and the hypermedia links that drive pagination.

use super::cursor::{LIMIT_KEY, OFFSET_KEY};
use super::link::Link;
use crate::error::{Error, Result};
use crate::types::QueryMap;
use serde::Deserialize;
use serde_json::value::RawValue;
use std::collections::BTreeMap;

/// Page size requested by the first fetch of a stream
pub const DEFAULT_LIMIT: &str = "10";
/// Offset requested by the first fetch of a stream
pub const DEFAULT_OFFSET: &str = "0";

/// Count summary carried by every page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSummary {
    /// Human-readable collection title
    #[serde(default)]
    pub title: String,
    /// Position of this page within the collection
    #[serde(default)]
    pub offset: u64,
    /// Collection size as reported by this page; may move between pages
    #[serde(default)]
    pub total: u64,
    /// Page size that was requested
    #[serde(default)]
    pub limit: u64,
    /// Number of entities actually present in this page
    #[serde(default)]
    pub size: u64,
}

/// One page of a collection as it arrives off the wire.
///
/// Envelopes are immutable once parsed; walking a collection replaces the
/// current envelope rather than mutating it.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    /// Siren class tags
    #[serde(default)]
    pub class: Vec<String>,
    /// Count summary (wire field `properties`)
    #[serde(default)]
    pub properties: PageSummary,
    /// Raw entity block, absent on empty pages
    pub entities: Option<Box<RawValue>>,
    /// Hypermedia links
    #[serde(default)]
    pub links: Vec<Link>,
}

impl PageEnvelope {
    /// Parse an envelope out of a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::decode(format!("invalid page envelope: {e}")))
    }

    /// Build the synthetic page-zero envelope that seeds a stream.
    ///
    /// Both its `self` and `next` links point at the first real page, so the
    /// opening fetch goes through the same cursor resolution as every later
    /// one. `params` are merged over the default `limit`/`offset` pair.
    pub fn seed(path: &str, params: &QueryMap) -> Self {
        let href = seed_href(path, params);
        Self {
            class: Vec::new(),
            properties: PageSummary::default(),
            entities: None,
            links: vec![Link::new("self", &href), Link::new("next", &href)],
        }
    }
}

/// Encode the seed href with keys in sorted order
fn seed_href(path: &str, params: &QueryMap) -> String {
    let mut merged = BTreeMap::new();
    merged.insert(LIMIT_KEY.to_string(), DEFAULT_LIMIT.to_string());
    merged.insert(OFFSET_KEY.to_string(), DEFAULT_OFFSET.to_string());
    for (key, value) in params {
        merged.insert(key.clone(), value.clone());
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &merged {
        query.append_pair(key, value);
    }

    format!("{path}?{}", query.finish())
}
