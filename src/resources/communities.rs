//! Community lookups and listings.

use crate::error::Result;
use crate::http::ApiClient;
use crate::pagination::{LIMIT_KEY, OFFSET_KEY};
use crate::stream::EntityStream;
use crate::types::QueryMap;

use super::ensure_id;
use super::types::Community;

impl ApiClient {
    /// Fetches a single community by id.
    pub async fn community(&self, id: &str) -> Result<Community> {
        ensure_id(id)?;
        self.get_entity(&format!("community/{id}"), &QueryMap::new())
            .await
    }

    /// Fetches one page of communities at the given cursor position.
    pub async fn communities_page(&self, offset: u64, limit: u64) -> Result<Vec<Community>> {
        let mut params = QueryMap::new();
        params.insert(OFFSET_KEY.to_string(), offset.to_string());
        params.insert(LIMIT_KEY.to_string(), limit.to_string());

        self.collection_page("community", &params).await
    }

    /// Streams every community visible to the credential.
    pub fn list_communities(&self) -> EntityStream<Community> {
        self.stream_json("community", QueryMap::new())
    }
}
