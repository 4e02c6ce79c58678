use thiserror::Error;

/// Failure reported by an [`EmbeddingService`](crate::domain::ports::EmbeddingService).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct EmbeddingError(pub String);

/// Failure reported by a [`VectorStore`](crate::domain::ports::VectorStore).
#[derive(Error, Debug)]
#[error("{0}")]
pub struct StoreError(pub String);

impl EmbeddingError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Cannot decode '{filename}'.")]
    Decode { filename: String },

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Database error: {0}")]
    Storage(#[from] StoreError),

    /// Anything outside the three pipeline stages; the message is shown as is.
    #[error("{0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DecodeFailure,
    EmbeddingFailure,
    StorageFailure,
    UnexpectedFailure,
}

impl DomainError {
    pub fn decode(filename: impl Into<String>) -> Self {
        Self::Decode {
            filename: filename.into(),
        }
    }

    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(EmbeddingError::new(msg))
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(StoreError::new(msg))
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::Embedding(_) => ErrorKind::EmbeddingFailure,
            Self::Storage(_) => ErrorKind::StorageFailure,
            Self::Unexpected(_) => ErrorKind::UnexpectedFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
