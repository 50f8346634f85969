//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Memoria API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Memoria API",
        version = "0.1.0",
        description = "External memory service: stores text chunks and retrieves them by semantic similarity"
    ),
    paths(
        crate::api::health::health,
        crate::api::chunks::add_chunk,
        crate::api::chunks::add_chunks_batch,
        crate::api::search::search,
    ),
    components(schemas(
        domain_memory::Chunk,
        domain_memory::SearchHit,
        crate::api::health::HealthResponse,
        crate::api::chunks::ChunkAck,
        crate::api::chunks::BatchAck,
    )),
    tags(
        (name = "memoria", description = "Chunk storage and semantic search")
    )
)]
pub struct ApiDoc;
