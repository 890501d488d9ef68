//! Decoder types and traits
//!
//! Defines the core decoder abstraction streams are generic over.

use crate::error::Result;
use serde_json::value::RawValue;

/// Trait for decoding a page's raw entity block into typed items
pub trait EntityDecoder: Send + Sync {
    /// The item type produced
    type Item;

    /// Decode the block, preserving item order
    fn decode(&self, entities: &RawValue) -> Result<Vec<Self::Item>>;
}
