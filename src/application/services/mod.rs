mod browse;
mod ingestion;
mod query;

#[cfg(test)]
pub(crate) mod mocks;

pub use browse::BrowseService;
pub use ingestion::{IngestReceipt, IngestionService};
pub use query::QueryService;
