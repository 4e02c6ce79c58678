use crate::domain::{errors::EmbeddingError, Embedding};
use async_trait::async_trait;

#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;
    /// Length of every vector this service produces.
    fn dimension(&self) -> usize;
}
