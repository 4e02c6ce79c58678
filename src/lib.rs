//! Document ingestion and semantic search over HTTP.
//!
//! Uploaded text files are decoded, embedded and stored in a vector store;
//! queries are embedded the same way and answered by similarity search.
//!
//! - [`domain`]: entities, error taxonomy and the embedder / vector store ports
//! - [`application`]: ingestion, query and browse services
//! - [`infrastructure`]: configuration and the concrete adapters
//! - [`api`]: axum routes and HTTP error mapping

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
