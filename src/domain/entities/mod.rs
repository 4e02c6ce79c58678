mod document;
mod embedding;

pub use document::{
    Document, DocumentMetadata, EmbeddedDocument, ListedDocument, QueryResult, ScoredDocument,
    StoredDocument, UploadedFile, UNKNOWN_FILENAME,
};
pub use embedding::Embedding;
