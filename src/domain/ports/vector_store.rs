use crate::domain::{
    errors::StoreError, EmbeddedDocument, Embedding, ScoredDocument, StoredDocument,
};
use async_trait::async_trait;

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Persists the batch in order. Ids, texts, metadata and vectors travel together.
    async fn add(&self, records: &[EmbeddedDocument]) -> Result<(), StoreError>;
    /// Best match first, at most `top_k` hits.
    async fn similarity_search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredDocument>, StoreError>;
    async fn list_all(&self) -> Result<Vec<StoredDocument>, StoreError>;
}
