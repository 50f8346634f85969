//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health response body
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always true while the process is serving
    pub ok: bool,
    /// Name of the collection this instance serves
    pub collection: String,
}

/// Liveness check.
///
/// Touches neither the embedding model nor the vector store, so it stays
/// fast and keeps answering when the backends are down or unconfigured.
#[utoipa::path(
    get,
    path = "/health",
    tag = "memoria",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        collection: state.config.collection.clone(),
    })
}
