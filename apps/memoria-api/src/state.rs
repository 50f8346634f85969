//! Application state management

use std::sync::Arc;

use domain_memory::{
    ChunkRepository, LocalEmbedder, MemoryResult, MemoryService, QdrantChunkRepository,
    QdrantConfig, EMBEDDING_DIM,
};
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::Config;

/// Shared application state.
///
/// The memory service sits behind a `OnceCell`: the first request that needs
/// the store or the model pays the initialization cost, concurrent first
/// requests wait on the same cell instead of racing, and a failed attempt is
/// retried by the next request. `/health` never touches the cell.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    service: Arc<OnceCell<MemoryService<QdrantChunkRepository>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            service: Arc::new(OnceCell::new()),
        }
    }

    /// Get the memory service, initializing it on first use.
    ///
    /// Initialization reads the Qdrant settings from the environment,
    /// connects, creates the collection when absent (existing data is kept)
    /// and loads the embedding model.
    pub async fn service(&self) -> MemoryResult<&MemoryService<QdrantChunkRepository>> {
        self.service
            .get_or_try_init(|| async {
                let qdrant = QdrantConfig::from_env()?;

                info!("Connecting to Qdrant at {}", qdrant.url);
                let repository =
                    QdrantChunkRepository::new(qdrant, self.config.collection.clone())?;
                repository.ensure_collection(EMBEDDING_DIM as u64).await?;

                info!("Loading embedding model");
                let embedder = LocalEmbedder::load().await?;

                Ok(MemoryService::new(repository, Arc::new(embedder)))
            })
            .await
    }
}
