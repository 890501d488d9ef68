//! Entity decoding module
//!
//! The page envelope keeps its `entities` block raw; this module turns that
//! block, or a whole single-entity body, into typed values.
//!
//! # Overview
//!
//! Streams are generic over [`EntityDecoder`] so each resource decides how
//! its entity block decodes. [`JsonEntityDecoder`] covers every type that
//! implements `Deserialize`; resources with irregular wire shapes implement
//! their own `Deserialize` and still go through it.

mod decoders;
mod types;

pub use decoders::{decode_entities, decode_entity, JsonEntityDecoder};
pub use types::EntityDecoder;

#[cfg(test)]
mod tests;
