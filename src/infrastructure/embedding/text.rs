use async_trait::async_trait;
use rig::client::{EmbeddingsClient, ProviderClient};
use rig::embeddings::EmbeddingsBuilder;
use rig::providers::openai;

use crate::domain::{ports::EmbeddingService, Embedding, EmbeddingError};
use crate::infrastructure::config::EmbeddingConfig;

const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// OpenAI embeddings through rig. The client is built once and reused.
pub struct TextEmbedding {
    client: openai::Client,
    model: String,
    dimension: usize,
}

impl TextEmbedding {
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        if std::env::var(API_KEY_VAR).is_err() {
            return Err(EmbeddingError::new(format!(
                "{API_KEY_VAR} must be set for the openai embedding provider"
            )));
        }

        Ok(Self {
            client: openai::Client::from_env(),
            model: config.model.clone(),
            dimension: config.dimension,
        })
    }
}

#[async_trait]
impl EmbeddingService for TextEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let model = self.client.embedding_model(&self.model);

        let embeddings = EmbeddingsBuilder::new(model)
            .document(text)
            .map_err(|e| EmbeddingError::new(e.to_string()))?
            .build()
            .await
            .map_err(|e| EmbeddingError::new(e.to_string()))?;

        embeddings
            .into_iter()
            .next()
            .map(|(_doc, emb)| {
                let vec_f32: Vec<f32> = emb.first().vec.into_iter().map(|x| x as f32).collect();
                Embedding::new(vec_f32)
            })
            .ok_or_else(|| EmbeddingError::new("No embedding returned"))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
