use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::{
    ports::VectorStore, EmbeddedDocument, Embedding, ScoredDocument, StoreError, StoredDocument,
};

/// Process-local store. Search is brute-force cosine similarity (higher is
/// closer); listing returns records in insertion order.
pub struct InMemoryVectorStore {
    records: RwLock<Vec<EmbeddedDocument>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add(&self, records: &[EmbeddedDocument]) -> Result<(), StoreError> {
        let mut store = self
            .records
            .write()
            .map_err(|e| StoreError::new(e.to_string()))?;

        store.extend_from_slice(records);
        Ok(())
    }

    async fn similarity_search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        let store = self
            .records
            .read()
            .map_err(|e| StoreError::new(e.to_string()))?;

        let mut results: Vec<ScoredDocument> = store
            .iter()
            .map(|record| ScoredDocument {
                text: record.document.text.clone(),
                metadata: record.document.metadata(),
                score: query.cosine_similarity(&record.embedding),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    async fn list_all(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let store = self
            .records
            .read()
            .map_err(|e| StoreError::new(e.to_string()))?;

        Ok(store
            .iter()
            .map(|record| StoredDocument {
                text: record.document.text.clone(),
                metadata: record.document.metadata(),
            })
            .collect())
    }
}
