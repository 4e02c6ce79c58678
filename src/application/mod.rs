//! Application layer - Use cases and orchestration.
//!
//! Services here sequence the domain ports (decode, embed, store) for one
//! request. They depend on the traits in `domain::ports`, never on concrete
//! adapters.

pub mod services;

pub use services::{BrowseService, IngestReceipt, IngestionService, QueryService};
