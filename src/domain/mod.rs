pub mod decoder;
pub mod entities;
pub mod errors;
pub mod ports;

pub use decoder::decode_utf8;
pub use entities::*;
pub use errors::{DomainError, EmbeddingError, ErrorKind, Result, StoreError};
