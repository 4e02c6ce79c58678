use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    EmbeddedDocument, Embedding, EmbeddingError, ScoredDocument, StoreError, StoredDocument,
};

pub struct StubEmbedding {
    produced: usize,
    reported: usize,
    fail_on: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl StubEmbedding {
    pub fn new(dimension: usize) -> Self {
        Self {
            produced: dimension,
            reported: dimension,
            fail_on: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_string()),
            ..Self::new(4)
        }
    }

    pub fn reporting_dimension(mut self, dimension: usize) -> Self {
        self.reported = dimension;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl EmbeddingService for StubEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.as_deref() == Some(text) {
            return Err(EmbeddingError::new("model unavailable"));
        }
        let mut vec = vec![0.0; self.produced];
        if let Some(first) = vec.first_mut() {
            *first = text.len() as f32;
        }
        Ok(Embedding::new(vec))
    }

    fn dimension(&self) -> usize {
        self.reported
    }
}

#[derive(Default)]
pub struct RecordingStore {
    batches: Mutex<Vec<Vec<EmbeddedDocument>>>,
    hits: Vec<ScoredDocument>,
    listing: Vec<StoredDocument>,
    searches: Mutex<Vec<usize>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(mut self, hits: Vec<ScoredDocument>) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_listing(mut self, listing: Vec<StoredDocument>) -> Self {
        self.listing = listing;
        self
    }

    pub fn batches(&self) -> Vec<Vec<EmbeddedDocument>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn add_calls(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// `top_k` of every search, in call order.
    pub fn searches(&self) -> Vec<usize> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorStore for RecordingStore {
    async fn add(&self, records: &[EmbeddedDocument]) -> Result<(), StoreError> {
        self.batches.lock().unwrap().push(records.to_vec());
        Ok(())
    }

    async fn similarity_search(
        &self,
        _query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        self.searches.lock().unwrap().push(top_k);
        Ok(self.hits.iter().take(top_k).cloned().collect())
    }

    async fn list_all(&self) -> Result<Vec<StoredDocument>, StoreError> {
        Ok(self.listing.clone())
    }
}

pub struct FailingStore;

#[async_trait]
impl VectorStore for FailingStore {
    async fn add(&self, _records: &[EmbeddedDocument]) -> Result<(), StoreError> {
        Err(StoreError::new("disk full"))
    }

    async fn similarity_search(
        &self,
        _query: &Embedding,
        _top_k: usize,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        Err(StoreError::new("collection unavailable"))
    }

    async fn list_all(&self) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::new("collection unavailable"))
    }
}
