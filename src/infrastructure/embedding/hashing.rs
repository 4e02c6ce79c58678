//! Local feature-hashing embedder.
//!
//! Every whitespace-separated, lowercased token is hashed with blake3 into
//! one of `dimension` buckets with a hash-derived sign, and the result is
//! L2-normalised. Identical texts always produce identical vectors, which is
//! all the search pipeline needs for development and tests; it carries no
//! semantic knowledge.

use async_trait::async_trait;

use crate::domain::{ports::EmbeddingService, Embedding, EmbeddingError};

pub struct HashingEmbedding {
    dimension: usize,
}

impl HashingEmbedding {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn bucket(&self, token: &str) -> (usize, f32) {
        let hash = blake3::hash(token.as_bytes());
        let bytes = hash.as_bytes();
        let mut index = [0u8; 8];
        index.copy_from_slice(&bytes[..8]);
        let bucket = (u64::from_le_bytes(index) % self.dimension as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (bucket, sign)
    }

    fn hash_tokens(&self, text: &str) -> Embedding {
        let mut vec = vec![0.0f32; self.dimension];
        for token in text.split_whitespace() {
            let (bucket, sign) = self.bucket(&token.to_lowercase());
            vec[bucket] += sign;
        }
        Embedding::new(vec).normalized()
    }
}

#[async_trait]
impl EmbeddingService for HashingEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        if self.dimension == 0 {
            return Err(EmbeddingError::new("hashing embedder has zero dimension"));
        }
        Ok(self.hash_tokens(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
