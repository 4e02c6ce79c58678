use async_trait::async_trait;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointId, PointStruct, ScrollPointsBuilder,
    SearchPointsBuilder, UpsertPointsBuilder, Value, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::domain::{
    ports::VectorStore, DocumentMetadata, EmbeddedDocument, Embedding, ScoredDocument,
    StoreError, StoredDocument,
};

const TEXT_KEY: &str = "text";
const FILENAME_KEY: &str = "filename";
const SCROLL_PAGE_SIZE: u32 = 256;

/// Qdrant-backed store. The collection uses cosine distance, so reported
/// scores are similarities where higher means closer.
pub struct QdrantVectorStore {
    client: Qdrant,
    collection: String,
    dimension: usize,
}

impl QdrantVectorStore {
    pub async fn new(url: &str, collection: &str, dimension: usize) -> Result<Self, StoreError> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(|e| StoreError::new(e.to_string()))?;

        let store = Self {
            client,
            collection: collection.to_string(),
            dimension,
        };

        store.ensure_collection().await?;

        Ok(store)
    }

    async fn ensure_collection(&self) -> Result<(), StoreError> {
        let collections = self
            .client
            .list_collections()
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        let exists = collections
            .collections
            .iter()
            .any(|c| c.name == self.collection);

        if !exists {
            self.client
                .create_collection(
                    CreateCollectionBuilder::new(&self.collection).vectors_config(
                        VectorParamsBuilder::new(self.dimension as u64, Distance::Cosine),
                    ),
                )
                .await
                .map_err(|e| StoreError::new(e.to_string()))?;
            info!(collection = %self.collection, dimension = self.dimension, "Created collection");
        }

        Ok(())
    }

    fn to_point(record: &EmbeddedDocument) -> Result<PointStruct, StoreError> {
        let payload: Payload = serde_json::json!({
            TEXT_KEY: record.document.text,
            FILENAME_KEY: record.document.filename,
        })
        .try_into()
        .map_err(|_| StoreError::new("Failed to create payload"))?;

        Ok(PointStruct::new(
            record.document.id.to_string(),
            record.embedding.as_slice().to_vec(),
            payload,
        ))
    }

    /// Reads text and metadata back out of a payload. Missing keys are not
    /// an error: text becomes empty and filename stays unset.
    fn from_payload(payload: &HashMap<String, Value>) -> (String, DocumentMetadata) {
        let text = payload
            .get(TEXT_KEY)
            .and_then(Value::as_str)
            .cloned()
            .unwrap_or_default();
        let metadata = DocumentMetadata {
            filename: payload.get(FILENAME_KEY).and_then(Value::as_str).cloned(),
        };
        (text, metadata)
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    async fn add(&self, records: &[EmbeddedDocument]) -> Result<(), StoreError> {
        let points = records
            .iter()
            .map(Self::to_point)
            .collect::<Result<Vec<_>, _>>()?;

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, points).wait(true))
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        debug!(count = records.len(), "Upserted points");
        Ok(())
    }

    async fn similarity_search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        let results = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, query.as_slice().to_vec(), top_k as u64)
                    .with_payload(true),
            )
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        Ok(results
            .result
            .into_iter()
            .map(|point| {
                let (text, metadata) = Self::from_payload(&point.payload);
                ScoredDocument {
                    text,
                    metadata,
                    score: point.score,
                }
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let mut documents = Vec::new();
        let mut offset: Option<PointId> = None;

        loop {
            let mut request = ScrollPointsBuilder::new(&self.collection)
                .limit(SCROLL_PAGE_SIZE)
                .with_payload(true)
                .with_vectors(false);
            if let Some(next) = offset.take() {
                request = request.offset(next);
            }

            let page = self
                .client
                .scroll(request)
                .await
                .map_err(|e| StoreError::new(e.to_string()))?;

            documents.extend(page.result.iter().map(|point| {
                let (text, metadata) = Self::from_payload(&point.payload);
                StoredDocument { text, metadata }
            }));

            match page.next_page_offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(documents)
    }
}
