//! Document uploads, translations, and content downloads.

use tokio::io::AsyncWrite;

use crate::error::Result;
use crate::http::ApiClient;
use crate::stream::EntityStream;
use crate::types::QueryMap;

use super::ensure_id;
use super::types::{Document, Project, Status, Translation};

impl ApiClient {
    /// Fetches a single document by id.
    pub async fn document(&self, id: &str) -> Result<Document> {
        ensure_id(id)?;
        self.get_entity(&format!("document/{id}"), &QueryMap::new())
            .await
    }

    /// Re-fetches a document to pick up its latest processing status.
    pub async fn check_status(&self, document: &Document) -> Result<Document> {
        ensure_id(&document.properties.id)?;
        self.get_entity(
            &format!("document/{}", document.properties.id),
            &QueryMap::new(),
        )
        .await
    }

    /// Streams every document visible to the credential.
    pub fn list_documents(&self) -> EntityStream<Document> {
        self.stream_json("document", QueryMap::new())
    }

    /// Uploads an in-memory string as a new document in the project.
    pub async fn upload_string(
        &self,
        title: &str,
        content: &str,
        locale_code: &str,
        project: &Project,
    ) -> Result<Status> {
        let mut params = QueryMap::new();
        params.insert("title".to_string(), title.to_string());
        params.insert("content".to_string(), content.to_string());
        params.insert("locale_code".to_string(), locale_code.to_string());
        params.insert("project_id".to_string(), project.properties.id.clone());

        self.post_entity("document", &params).await
    }

    /// Requests a translation of the document into the target locale.
    pub async fn add_translation(
        &self,
        document: &Document,
        locale_code: &str,
    ) -> Result<Translation> {
        ensure_id(&document.properties.id)?;

        let mut params = QueryMap::new();
        params.insert("locale_code".to_string(), locale_code.to_string());

        self.post_entity(
            &format!("document/{}/translation", document.properties.id),
            &params,
        )
        .await
    }

    /// Streams the translations requested for a document.
    pub fn list_translations(&self, document: &Document) -> EntityStream<Translation> {
        self.stream_json(
            &format!("document/{}/translation", document.properties.id),
            QueryMap::new(),
        )
    }

    /// Downloads the document's translated content into `writer`,
    /// returning the number of bytes written.
    pub async fn translated_document<W>(
        &self,
        document: &Document,
        locale_code: &str,
        writer: &mut W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        ensure_id(&document.properties.id)?;

        let mut params = QueryMap::new();
        params.insert("locale_code".to_string(), locale_code.to_string());

        self.download(
            &format!("document/{}/content", document.properties.id),
            &params,
            writer,
        )
        .await
    }
}
