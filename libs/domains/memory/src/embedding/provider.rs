use async_trait::async_trait;

use crate::error::MemoryResult;

/// Trait for text-embedding backends.
///
/// For a fixed model the mapping is deterministic: the same text always
/// produces the same vector.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Output vector dimension.
    fn dimension(&self) -> usize;

    /// Generate the embedding for a single text.
    async fn embed(&self, text: &str) -> MemoryResult<Vec<f32>>;

    /// Generate embeddings for multiple texts in one batch, preserving order.
    async fn embed_batch(&self, texts: &[String]) -> MemoryResult<Vec<Vec<f32>>>;
}
