use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::{error::ApiResult, state::AppState};
use crate::domain::ListedDocument;

#[derive(Debug, Serialize)]
pub struct DatabaseResponse {
    pub documents: Vec<ListedDocument>,
}

pub async fn list_documents(State(state): State<AppState>) -> ApiResult<Json<DatabaseResponse>> {
    let documents = state.browse.list_documents().await?;
    Ok(Json(DatabaseResponse { documents }))
}
