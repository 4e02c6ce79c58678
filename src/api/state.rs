use std::sync::Arc;

use crate::application::{BrowseService, IngestionService, QueryService};
use crate::domain::ports::{EmbeddingService, VectorStore};
use crate::infrastructure::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<IngestionService>,
    pub query: Arc<QueryService>,
    pub browse: Arc<BrowseService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wires the services around one shared embedder and vector store.
    pub fn new(
        embedding: Arc<dyn EmbeddingService>,
        vector_store: Arc<dyn VectorStore>,
        config: AppConfig,
    ) -> Self {
        let ingestion = IngestionService::new(embedding.clone(), vector_store.clone());
        let query = QueryService::new(embedding, vector_store.clone(), config.search.top_k);
        let browse = BrowseService::new(vector_store);

        Self {
            ingestion: Arc::new(ingestion),
            query: Arc::new(query),
            browse: Arc::new(browse),
            config: Arc::new(config),
        }
    }
}
