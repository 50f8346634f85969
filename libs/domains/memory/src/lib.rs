//! Memory Domain Library
//!
//! Stores text chunks and retrieves them by semantic similarity: texts are
//! embedded with a local sentence-embedding model and persisted in a Qdrant
//! collection; queries run as cosine nearest-neighbor searches over those
//! embeddings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  MemoryService  │  ← embed + upsert/search orchestration
//! └────────┬────────┘
//!          │
//! ┌────────▼─────────┐      ┌─────────────────┐
//! │ ChunkRepository  │      │    Embedder     │
//! │     (trait)      │      │     (trait)     │
//! └────────┬─────────┘      └────────┬────────┘
//!          │                         │
//! ┌────────▼──────────────┐  ┌───────▼───────┐
//! │ QdrantChunkRepository │  │ LocalEmbedder │
//! │   (implementation)    │  │  (fastembed)  │
//! └───────────────────────┘  └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_memory::{
//!     Chunk, ChunkRepository, LocalEmbedder, MemoryService, QdrantChunkRepository,
//!     QdrantConfig, EMBEDDING_DIM,
//! };
//!
//! # async fn example() -> domain_memory::MemoryResult<()> {
//! let config = QdrantConfig::from_env()?;
//! let repository = QdrantChunkRepository::new(config, "historia")?;
//! repository.ensure_collection(EMBEDDING_DIM as u64).await?;
//!
//! let embedder = LocalEmbedder::load().await?;
//! let service = MemoryService::new(repository, Arc::new(embedder));
//!
//! let chunk = Chunk {
//!     id: "capitulo-1".to_string(),
//!     titulo: "A fundação".to_string(),
//!     texto: "No início, a cidade era um porto de pescadores.".to_string(),
//!     tags: vec![],
//!     canonical: true,
//! };
//! service.add_chunk(chunk).await?;
//!
//! let _hits = service.search("como a cidade começou", 5).await?;
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod error;
pub mod models;
pub mod qdrant;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use embedding::{Embedder, LocalEmbedder, EMBEDDING_DIM};
pub use error::{MemoryError, MemoryResult};
pub use models::{Chunk, ChunkPoint, SearchHit};
pub use qdrant::{QdrantChunkRepository, QdrantConfig};
pub use repository::ChunkRepository;
pub use service::{MemoryService, SEARCH_LIMIT_MAX, SEARCH_LIMIT_MIN};
