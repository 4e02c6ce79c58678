use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{error::ApiResult, state::AppState, ApiError};
use crate::domain::QueryResult;

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub query_text: String,
    /// Number of results; the configured default when absent.
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub results: Vec<QueryResult>,
}

pub async fn query_documents(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> ApiResult<Json<QueryResponse>> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let top_k = match params.k {
        Some(0) => return Err(ApiError::bad_request("k must be greater than zero")),
        Some(k) => k,
        None => state.query.default_top_k(),
    };

    let results = state.query.query_top_k(&params.query_text, top_k).await?;
    Ok(Json(QueryResponse { results }))
}
