//! Chunk ingestion endpoints

use axum::{extract::State, Json};
use axum_helpers::ValidatedJson;
use domain_memory::{Chunk, MemoryError, MemoryResult};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::state::AppState;

/// Acknowledgment for a single chunk upsert
#[derive(Serialize, ToSchema)]
pub struct ChunkAck {
    pub status: String,
    pub id: String,
}

/// Acknowledgment for a batch upsert
#[derive(Serialize, ToSchema)]
pub struct BatchAck {
    pub status: String,
    pub count: usize,
}

/// Store a single chunk.
///
/// The text is embedded and upserted under the chunk's id; re-sending the
/// same id overwrites the stored entry.
#[utoipa::path(
    post,
    path = "/chunks",
    tag = "memoria",
    request_body = Chunk,
    responses(
        (status = 200, description = "Chunk stored", body = ChunkAck),
        (status = 400, description = "Invalid chunk"),
        (status = 500, description = "Configuration, embedding or store failure")
    )
)]
pub async fn add_chunk(
    State(state): State<AppState>,
    ValidatedJson(chunk): ValidatedJson<Chunk>,
) -> MemoryResult<Json<ChunkAck>> {
    let service = state.service().await?;
    let id = service.add_chunk(chunk).await?;

    Ok(Json(ChunkAck {
        status: "ok".to_string(),
        id,
    }))
}

/// Store a batch of chunks in one upsert.
///
/// The whole batch succeeds or the request fails; there is no per-chunk
/// success reporting.
#[utoipa::path(
    post,
    path = "/chunks/batch",
    tag = "memoria",
    request_body = Vec<Chunk>,
    responses(
        (status = 200, description = "Batch stored", body = BatchAck),
        (status = 400, description = "Invalid chunk in batch"),
        (status = 500, description = "Configuration, embedding or store failure")
    )
)]
pub async fn add_chunks_batch(
    State(state): State<AppState>,
    Json(chunks): Json<Vec<Chunk>>,
) -> MemoryResult<Json<BatchAck>> {
    for chunk in &chunks {
        chunk
            .validate()
            .map_err(|e| MemoryError::Validation(format!("chunk '{}': {}", chunk.id, e)))?;
    }

    let service = state.service().await?;
    let count = service.add_chunks_batch(chunks).await?;

    Ok(Json(BatchAck {
        status: "ok".to_string(),
        count,
    }))
}
