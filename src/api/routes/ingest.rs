use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::api::{error::ApiResult, state::AppState, ApiError};
use crate::domain::{DomainError, UploadedFile, UNKNOWN_FILENAME};

/// Multipart field name carrying the uploaded files.
pub const FILES_FIELD: &str = "files";

const SUCCESS_STATUS: &str = "Documents uploaded successfully";

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
}

pub async fn ingest_documents(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<IngestResponse>> {
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let files = read_files(&mut multipart).await?;

    state.ingestion.ingest(&files).await?;

    Ok(Json(IngestResponse {
        status: SUCCESS_STATUS,
    }))
}

/// Buffers every `files` part in arrival order. Other parts are skipped.
async fn read_files(multipart: &mut Multipart) -> ApiResult<Vec<UploadedFile>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(file_error)? {
        if field.name() != Some(FILES_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let filename = field.file_name().unwrap_or(UNKNOWN_FILENAME).to_string();
        let bytes = field.bytes().await.map_err(file_error)?;

        info!(filename = %filename, size = bytes.len(), "Read uploaded file");
        files.push(UploadedFile::new(filename, bytes.to_vec()));
    }

    Ok(files)
}

/// Client faults (body over the limit, malformed stream) keep axum's 4xx
/// status; anything else is an UnexpectedFailure.
fn file_error(err: MultipartError) -> ApiError {
    let status = err.status();
    let message = format!("File error: {}", err.body_text());
    if status.is_client_error() {
        ApiError::rejected(status, message)
    } else {
        DomainError::unexpected(message).into()
    }
}
