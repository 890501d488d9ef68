//! Decoder implementations

use super::types::EntityDecoder;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::marker::PhantomData;

/// Decode a raw entity block into a list of `T`
pub fn decode_entities<T: DeserializeOwned>(entities: &RawValue) -> Result<Vec<T>> {
    serde_json::from_str(entities.get())
        .map_err(|e| Error::decode(format!("invalid entity block: {e}")))
}

/// Decode a whole response body into a single `T`
pub fn decode_entity<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::decode(format!("invalid entity: {e}")))
}

/// Serde-backed decoder for any `Deserialize` entity type
pub struct JsonEntityDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonEntityDecoder<T> {
    /// Create a decoder for `T`
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonEntityDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonEntityDecoder<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonEntityDecoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEntityDecoder").finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned> EntityDecoder for JsonEntityDecoder<T> {
    type Item = T;

    fn decode(&self, entities: &RawValue) -> Result<Vec<T>> {
        decode_entities(entities)
    }
}
