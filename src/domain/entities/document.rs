use serde::Serialize;
use uuid::Uuid;

use super::Embedding;

/// Filename reported for stored records whose metadata carries none.
pub const UNKNOWN_FILENAME: &str = "unknown";

/// A raw file part as received from an upload, before decoding.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub filename: String,
    pub text: String,
}

impl Document {
    /// Creates a document with a freshly generated id.
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            text: text.into(),
        }
    }

    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata::with_filename(&self.filename)
    }
}

#[derive(Debug, Clone)]
pub struct EmbeddedDocument {
    pub document: Document,
    pub embedding: Embedding,
}

impl EmbeddedDocument {
    pub fn new(document: Document, embedding: Embedding) -> Self {
        Self {
            document,
            embedding,
        }
    }
}

/// Metadata kept beside each stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub filename: Option<String>,
}

impl DocumentMetadata {
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
        }
    }

    pub fn filename_or_unknown(&self) -> &str {
        self.filename.as_deref().unwrap_or(UNKNOWN_FILENAME)
    }
}

/// A record as returned by [`VectorStore::list_all`](crate::domain::ports::VectorStore::list_all).
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// A similarity-search hit. `score` is whatever metric the store reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub filename: String,
    pub score: f32,
    pub text: String,
}

impl From<ScoredDocument> for QueryResult {
    fn from(hit: ScoredDocument) -> Self {
        Self {
            filename: hit.metadata.filename_or_unknown().to_string(),
            score: hit.score,
            text: hit.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedDocument {
    pub filename: String,
    pub text: String,
}

impl From<StoredDocument> for ListedDocument {
    fn from(doc: StoredDocument) -> Self {
        Self {
            filename: doc.metadata.filename_or_unknown().to_string(),
            text: doc.text,
        }
    }
}
