use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    DomainError, QueryResult,
};

pub struct QueryService {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
    default_top_k: usize,
}

impl QueryService {
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
        default_top_k: usize,
    ) -> Self {
        Self {
            embedding,
            vector_store,
            default_top_k,
        }
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    #[instrument(skip(self))]
    pub async fn query(&self, text: &str) -> Result<Vec<QueryResult>, DomainError> {
        self.query_top_k(text, self.default_top_k).await
    }

    /// Results keep the store's ranking and score untouched.
    #[instrument(skip(self))]
    pub async fn query_top_k(
        &self,
        text: &str,
        top_k: usize,
    ) -> Result<Vec<QueryResult>, DomainError> {
        let embedding = self.embedding.embed(text).await?;
        let expected = self.embedding.dimension();
        if embedding.dimension() != expected {
            return Err(DomainError::embedding(format!(
                "expected {expected}-dimensional query vector, got {}",
                embedding.dimension()
            )));
        }

        let hits = self
            .vector_store
            .similarity_search(&embedding, top_k)
            .await?;

        debug!(hits = hits.len(), "Query processed");
        Ok(hits.into_iter().map(QueryResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::mocks::{FailingStore, RecordingStore, StubEmbedding};
    use crate::domain::{DocumentMetadata, ErrorKind, ScoredDocument};

    fn hit(filename: Option<&str>, text: &str, score: f32) -> ScoredDocument {
        ScoredDocument {
            text: text.to_string(),
            metadata: DocumentMetadata {
                filename: filename.map(str::to_string),
            },
            score,
        }
    }

    #[tokio::test]
    async fn test_query_preserves_store_order_and_scores() {
        // Deliberately not sorted by score: the service must not re-rank.
        let store = Arc::new(RecordingStore::new().with_hits(vec![
            hit(Some("b.txt"), "beta", 0.2),
            hit(None, "orphan", 0.9),
            hit(Some("a.txt"), "alpha", 0.5),
        ]));
        let svc = QueryService::new(Arc::new(StubEmbedding::new(4)), store.clone(), 5);

        let results = svc.query("anything").await.unwrap();

        let filenames: Vec<_> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(filenames, ["b.txt", "unknown", "a.txt"]);
        let scores: Vec<_> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, [0.2, 0.9, 0.5]);
        assert_eq!(store.searches(), [5]);
    }

    #[tokio::test]
    async fn test_query_top_k_is_forwarded() {
        let store = Arc::new(RecordingStore::new());
        let svc = QueryService::new(Arc::new(StubEmbedding::new(4)), store.clone(), 5);

        let results = svc.query_top_k("anything", 2).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(store.searches(), [2]);
    }

    #[tokio::test]
    async fn test_query_error_kinds() {
        let svc = QueryService::new(
            Arc::new(StubEmbedding::failing_on("boom")),
            Arc::new(RecordingStore::new()),
            5,
        );
        let err = svc.query("boom").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmbeddingFailure);

        let svc = QueryService::new(Arc::new(StubEmbedding::new(4)), Arc::new(FailingStore), 5);
        let err = svc.query("fine").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageFailure);
    }

    #[tokio::test]
    async fn test_wrong_query_dimension_never_reaches_store() {
        let store = Arc::new(RecordingStore::new());
        let svc = QueryService::new(
            Arc::new(StubEmbedding::new(4).reporting_dimension(8)),
            store.clone(),
            5,
        );

        let err = svc.query("anything").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmbeddingFailure);
        assert!(store.searches().is_empty());
    }
}
