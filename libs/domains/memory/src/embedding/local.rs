use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use super::{Embedder, EMBEDDING_DIM};
use crate::error::{MemoryError, MemoryResult};

/// Local sentence-embedding backend: all-MiniLM-L6-v2 via fastembed.
///
/// The ONNX model is fetched once and cached; after that, inference runs
/// fully offline. Model load and inference are blocking, so both are
/// offloaded to the blocking pool. fastembed takes `&mut self` for
/// inference, hence the mutex around the handle.
pub struct LocalEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
}

impl LocalEmbedder {
    /// Load the embedding model.
    ///
    /// Slow on the first ever call (model download); callers defer this to
    /// first use so service startup stays fast.
    pub async fn load() -> MemoryResult<Self> {
        let model = tokio::task::spawn_blocking(|| {
            TextEmbedding::try_new(
                InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
            )
            .map_err(|e| MemoryError::Embedding(format!("Failed to load embedding model: {}", e)))
        })
        .await
        .map_err(|e| MemoryError::Internal(format!("Embedding init task failed: {}", e)))??;

        info!("Embedding model loaded ({} dimensions)", EMBEDDING_DIM);

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

#[async_trait]
impl Embedder for LocalEmbedder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }

    async fn embed(&self, text: &str) -> MemoryResult<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| MemoryError::Embedding("Model returned no embedding".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> MemoryResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let model = Arc::clone(&self.model);
        let texts = texts.to_vec();

        tokio::task::spawn_blocking(move || {
            let mut model = model
                .lock()
                .map_err(|_| MemoryError::Internal("Embedding model mutex poisoned".to_string()))?;
            model
                .embed(texts, None)
                .map_err(|e| MemoryError::Embedding(e.to_string()))
        })
        .await
        .map_err(|e| MemoryError::Internal(format!("Embedding task failed: {}", e)))?
    }
}
