//! Builds the embedder and vector store selected in [`AppConfig`].
//!
//! Both are created once at startup and shared by every request.

use std::sync::Arc;
use tracing::info;

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    EmbeddingError, StoreError,
};
use crate::infrastructure::config::{
    AppConfig, EmbeddingConfig, EmbeddingProvider, VectorStoreConfig, VectorStoreProvider,
};
use crate::infrastructure::embedding::{HashingEmbedding, TextEmbedding};
use crate::infrastructure::vector_store::{InMemoryVectorStore, QdrantVectorStore};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("embedding provider: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("vector store: {0}")]
    Store(#[from] StoreError),
}

pub fn build_embedding(
    config: &EmbeddingConfig,
) -> Result<Arc<dyn EmbeddingService>, EmbeddingError> {
    let embedding: Arc<dyn EmbeddingService> = match config.provider {
        EmbeddingProvider::Openai => Arc::new(TextEmbedding::from_config(config)?),
        EmbeddingProvider::Hashing => Arc::new(HashingEmbedding::new(config.dimension)),
    };
    info!(provider = ?config.provider, model = %config.model, dimension = config.dimension, "Embedding provider ready");
    Ok(embedding)
}

pub async fn build_vector_store(
    config: &VectorStoreConfig,
    dimension: usize,
) -> Result<Arc<dyn VectorStore>, StoreError> {
    let store: Arc<dyn VectorStore> = match config.provider {
        VectorStoreProvider::Qdrant => Arc::new(
            QdrantVectorStore::new(&config.url, &config.collection, dimension).await?,
        ),
        VectorStoreProvider::Memory => Arc::new(InMemoryVectorStore::new()),
    };
    info!(provider = ?config.provider, collection = %config.collection, "Vector store ready");
    Ok(store)
}

pub async fn build_providers(
    config: &AppConfig,
) -> Result<(Arc<dyn EmbeddingService>, Arc<dyn VectorStore>), ProviderError> {
    let embedding = build_embedding(&config.embedding)?;
    let store = build_vector_store(&config.vector_store, embedding.dimension()).await?;
    Ok((embedding, store))
}
