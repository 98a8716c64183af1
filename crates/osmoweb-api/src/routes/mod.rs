//! API route handlers

pub mod bridge;
pub mod health;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use osmoweb_core::InfiniteQuery;

use crate::dto::{query_error, ApiError, ApiErrorResponse};
use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/bridge", bridge::router())
        .with_state(state)
}

/// Turn the raw `?cursor=&limit=` extraction into a validated query.
///
/// A cursor that is not an integer fails extraction; an out-of-range limit
/// fails validation. Both answer 400 with an [`ApiError`] body.
pub(crate) fn infinite_query(
    state: &AppState,
    query: Result<Query<InfiniteQuery>, QueryRejection>,
) -> Result<InfiniteQuery, ApiErrorResponse> {
    let Query(query) = query.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request(rejection.body_text())),
        )
    })?;

    state.check_query(&query).map_err(query_error)?;
    Ok(query)
}
