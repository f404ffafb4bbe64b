//! Course analytics endpoint handler

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CourseStats, Json};

/// GET /api/courses
pub async fn get_course_stats(
    State(state): State<AppState>,
) -> Result<Json<CourseStats>, ApiError> {
    let analytics = state
        .rag_service
        .get_course_analytics()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(CourseStats::from(analytics)))
}
