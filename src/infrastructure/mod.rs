pub mod config;
pub mod embedding;
pub mod providers;
pub mod vector_store;

pub use config::{AppConfig, ConfigError};
pub use embedding::{HashingEmbedding, TextEmbedding};
pub use providers::{build_embedding, build_providers, build_vector_store, ProviderError};
pub use vector_store::{InMemoryVectorStore, QdrantVectorStore};
