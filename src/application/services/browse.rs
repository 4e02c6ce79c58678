use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::{ports::VectorStore, DomainError, ListedDocument};

pub struct BrowseService {
    vector_store: Arc<dyn VectorStore>,
}

impl BrowseService {
    pub fn new(vector_store: Arc<dyn VectorStore>) -> Self {
        Self { vector_store }
    }

    #[instrument(skip(self))]
    pub async fn list_documents(&self) -> Result<Vec<ListedDocument>, DomainError> {
        let stored = self.vector_store.list_all().await?;
        debug!(count = stored.len(), "Database retrieval successful");
        Ok(stored.into_iter().map(ListedDocument::from).collect())
    }
}
