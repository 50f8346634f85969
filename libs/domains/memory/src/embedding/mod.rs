//! Embedding generation for chunk texts.

mod local;
mod provider;

pub use local::LocalEmbedder;
pub use provider::Embedder;

#[cfg(test)]
pub use provider::MockEmbedder;

/// Output dimension of the sentence-embedding model (all-MiniLM-L6-v2).
pub const EMBEDDING_DIM: usize = 384;
