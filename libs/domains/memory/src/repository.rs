use async_trait::async_trait;

use crate::error::MemoryResult;
use crate::models::{ChunkPoint, SearchHit};

/// Repository trait for chunk storage operations.
///
/// Abstracts the underlying vector database (Qdrant).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChunkRepository: Send + Sync {
    /// Create the backing collection if it does not exist yet.
    ///
    /// Idempotent and non-destructive: an existing collection and its data
    /// are left untouched. Must run before the first upsert or search.
    async fn ensure_collection(&self, dimension: u64) -> MemoryResult<()>;

    /// Insert or overwrite points by id.
    ///
    /// Batch atomicity is whatever the store provides; a failed batch may be
    /// partially applied, and that is passed through unmodified.
    async fn upsert(&self, points: Vec<ChunkPoint>) -> MemoryResult<()>;

    /// Return up to `limit` entries ranked by descending cosine similarity.
    async fn search(&self, vector: Vec<f32>, limit: u64) -> MemoryResult<Vec<SearchHit>>;
}
