//! Query endpoint handler

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, QueryRequest, QueryResponse};
use crate::domain::session::SessionId;

/// POST /api/query
pub async fn query_documents(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    // Empty-string ids behave like absent ones
    let session_id = request
        .session_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .map(SessionId::new)
        .transpose()?;

    info!(
        has_session = session_id.is_some(),
        query_len = request.query.len(),
        "Processing query"
    );

    let outcome = state
        .rag_service
        .query(&request.query, session_id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(QueryResponse::from(outcome)))
}
