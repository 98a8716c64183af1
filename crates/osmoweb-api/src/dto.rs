//! Data Transfer Objects for API requests and responses

use axelar::{BridgeError, ChainIdKind, SourceChain};
use axum::{http::StatusCode, Json};
use osmoweb_core::QueryError;
use serde::{Deserialize, Serialize};

/// Error half of every handler result
pub type ApiErrorResponse = (StatusCode, Json<ApiError>);

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub network: String,
}

impl HealthResponse {
    pub fn ok(network: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            network: network.into(),
        }
    }
}

/// Chain id resolved against one of the chain id tables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIdResponse {
    pub chain_id: String,
    pub kind: ChainIdKind,
    pub source_chain: SourceChain,
    pub display_name: String,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}

/// Map an infinite-query validation error onto its HTTP response
pub fn query_error(err: QueryError) -> ApiErrorResponse {
    (
        status(err.status_code()),
        Json(ApiError::new(err.error_code(), err.to_string())),
    )
}

/// Map a bridge lookup error onto its HTTP response
pub fn bridge_error(err: BridgeError) -> ApiErrorResponse {
    (
        status(err.status_code()),
        Json(ApiError::new(err.error_code(), err.to_string())),
    )
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
