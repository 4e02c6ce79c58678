use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    Document, DomainError, EmbeddedDocument, UploadedFile,
};

/// Acknowledgement of a stored batch; ids are in upload order.
#[derive(Debug, Clone, Default)]
pub struct IngestReceipt {
    pub ids: Vec<Uuid>,
}

impl IngestReceipt {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

pub struct IngestionService {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
}

impl IngestionService {
    pub fn new(embedding: Arc<dyn EmbeddingService>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self {
            embedding,
            vector_store,
        }
    }

    /// Decodes, embeds and stores one upload batch.
    ///
    /// Each stage completes for every file before the next one starts, so a
    /// failure anywhere leaves the store untouched. An empty batch succeeds
    /// without calling the embedder or the store.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn ingest(&self, files: &[UploadedFile]) -> Result<IngestReceipt, DomainError> {
        let documents = files
            .iter()
            .map(Document::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if documents.is_empty() {
            info!("Empty upload batch, nothing to store");
            return Ok(IngestReceipt::default());
        }

        let mut records = Vec::with_capacity(documents.len());
        for document in documents {
            let embedding = self.embedding.embed(&document.text).await?;
            let expected = self.embedding.dimension();
            if embedding.dimension() != expected {
                return Err(DomainError::embedding(format!(
                    "expected {expected}-dimensional vector for '{}', got {}",
                    document.filename,
                    embedding.dimension()
                )));
            }
            records.push(EmbeddedDocument::new(document, embedding));
        }

        self.vector_store.add(&records).await?;

        let receipt = IngestReceipt {
            ids: records.iter().map(|r| r.document.id).collect(),
        };
        info!(stored = receipt.len(), "Documents stored");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::mocks::{FailingStore, RecordingStore, StubEmbedding};
    use crate::domain::ErrorKind;

    fn service(embedding: StubEmbedding, store: Arc<dyn VectorStore>) -> IngestionService {
        IngestionService::new(Arc::new(embedding), store)
    }

    #[tokio::test]
    async fn test_ingest_stores_batch_in_order() {
        let store = Arc::new(RecordingStore::new());
        let svc = service(StubEmbedding::new(4), store.clone());

        let files = vec![
            UploadedFile::new("a.txt", "alpha"),
            UploadedFile::new("b.txt", "beta"),
            UploadedFile::new("a.txt", "gamma"),
        ];
        let receipt = svc.ingest(&files).await.unwrap();

        assert_eq!(receipt.len(), 3);
        let batches = store.batches();
        assert_eq!(batches.len(), 1);
        let batch = &batches[0];
        let texts: Vec<_> = batch.iter().map(|r| r.document.text.as_str()).collect();
        assert_eq!(texts, ["alpha", "beta", "gamma"]);
        let ids: Vec<_> = batch.iter().map(|r| r.document.id).collect();
        assert_eq!(ids, receipt.ids);
        assert!(batch.iter().all(|r| r.embedding.dimension() == 4));
    }

    #[tokio::test]
    async fn test_decode_failure_aborts_whole_batch() {
        let store = Arc::new(RecordingStore::new());
        let embedding = StubEmbedding::new(4);
        let calls = embedding.calls();
        let svc = service(embedding, store.clone());

        let files = vec![
            UploadedFile::new("good.txt", "fine"),
            UploadedFile::new("bad.bin", vec![0xc3, 0x28]),
            UploadedFile::new("later.txt", "never read"),
        ];
        let err = svc.ingest(&files).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DecodeFailure);
        assert_eq!(err.to_string(), "Cannot decode 'bad.bin'.");
        assert_eq!(store.add_calls(), 0);
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_batch_skips_store() {
        let store = Arc::new(RecordingStore::new());
        let svc = service(StubEmbedding::new(4), store.clone());

        let receipt = svc.ingest(&[]).await.unwrap();

        assert!(receipt.is_empty());
        assert_eq!(store.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_embedding_failure_stores_nothing() {
        let store = Arc::new(RecordingStore::new());
        let svc = service(StubEmbedding::failing_on("poison"), store.clone());

        let files = vec![
            UploadedFile::new("a.txt", "alpha"),
            UploadedFile::new("b.txt", "poison"),
        ];
        let err = svc.ingest(&files).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmbeddingFailure);
        assert_eq!(store.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_wrong_dimension_is_embedding_failure() {
        let store = Arc::new(RecordingStore::new());
        let svc = service(StubEmbedding::new(4).reporting_dimension(8), store.clone());

        let err = svc
            .ingest(&[UploadedFile::new("a.txt", "alpha")])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmbeddingFailure);
        assert_eq!(store.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let svc = service(StubEmbedding::new(4), Arc::new(FailingStore));

        let err = svc
            .ingest(&[UploadedFile::new("a.txt", "alpha")])
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::StorageFailure);
    }
}
