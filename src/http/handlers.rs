//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, Json};

use super::dto::{AwardIntervalsData, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::intervals;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the record
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };
    let movies = db_services::count_movies(state.repository.as_ref()).await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        movies,
    }))
}

/// GET /awards/intervals
///
/// Compute the producer award-interval report over the currently loaded
/// winning records. Responds 404 when no producer has more than one win.
pub async fn get_award_intervals(
    State(state): State<AppState>,
) -> HandlerResult<AwardIntervalsData> {
    let data = intervals::award_intervals(state.repository.as_ref()).await?;
    Ok(Json(data))
}
