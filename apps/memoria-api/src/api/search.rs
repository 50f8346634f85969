//! Semantic search endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use domain_memory::{MemoryResult, SearchHit};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::state::AppState;

/// Number of results returned when `k` is not given.
const DEFAULT_LIMIT: i64 = 5;

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Query text
    pub q: String,
    /// Number of results to return, clamped to 1..=50
    #[serde(default = "default_limit")]
    pub k: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Find the stored chunks most similar to the query text.
#[utoipa::path(
    get,
    path = "/search",
    tag = "memoria",
    params(SearchParams),
    responses(
        (status = 200, description = "Ranked results, most similar first", body = Vec<SearchHit>),
        (status = 500, description = "Configuration, embedding or store failure")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> MemoryResult<Json<Vec<SearchHit>>> {
    let service = state.service().await?;
    let hits = service.search(&params.q, params.k).await?;
    Ok(Json(hits))
}
