//! Project listings scoped to a community.

use crate::error::Result;
use crate::http::ApiClient;
use crate::stream::EntityStream;
use crate::types::QueryMap;

use super::types::{Community, Project};

const COMMUNITY_ID_KEY: &str = "community_id";

impl ApiClient {
    /// Fetches the first page of projects in a community.
    pub async fn projects(&self, community_id: &str) -> Result<Vec<Project>> {
        let mut params = QueryMap::new();
        params.insert(COMMUNITY_ID_KEY.to_string(), community_id.to_string());

        self.collection_page("project", &params).await
    }

    /// Streams every project in the community.
    ///
    /// The community filter rides along on every page request next to
    /// the cursor parameters.
    pub fn list_projects(&self, community: &Community) -> EntityStream<Project> {
        let mut params = QueryMap::new();
        params.insert(COMMUNITY_ID_KEY.to_string(), community.properties.id.clone());

        self.stream_json("project", params)
    }
}
