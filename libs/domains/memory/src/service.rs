use std::sync::Arc;

use crate::embedding::Embedder;
use crate::error::{MemoryError, MemoryResult};
use crate::models::{Chunk, ChunkPoint, SearchHit};
use crate::repository::ChunkRepository;

/// Smallest number of results a search may request.
pub const SEARCH_LIMIT_MIN: i64 = 1;
/// Largest number of results a search may request.
pub const SEARCH_LIMIT_MAX: i64 = 50;

/// High-level chunk operations: embed text, then persist to or query the
/// vector store.
///
/// Every operation is stateless request/response; the only persistent state
/// lives in the external store.
pub struct MemoryService<R: ChunkRepository> {
    repository: R,
    embedder: Arc<dyn Embedder>,
}

impl<R: ChunkRepository> MemoryService<R> {
    pub fn new(repository: R, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            repository,
            embedder,
        }
    }

    /// Embed the chunk's text and upsert a single point keyed by its id.
    ///
    /// Idempotent: repeating with the same id overwrites the stored entry.
    pub async fn add_chunk(&self, chunk: Chunk) -> MemoryResult<String> {
        let vector = self.embedder.embed(&chunk.texto).await?;
        let id = chunk.id.clone();

        self.repository
            .upsert(vec![ChunkPoint::new(vector, chunk)])
            .await?;

        Ok(id)
    }

    /// Embed every chunk's text in one batch and issue a single upsert.
    ///
    /// Returns the number of chunks accepted. No partial-success reporting:
    /// failure is store-wide.
    pub async fn add_chunks_batch(&self, chunks: Vec<Chunk>) -> MemoryResult<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.texto.clone()).collect();
        let vectors = self.embedder.embed_batch(&texts).await?;

        if vectors.len() != chunks.len() {
            return Err(MemoryError::Embedding(format!(
                "Expected {} embeddings, model returned {}",
                chunks.len(),
                vectors.len()
            )));
        }

        let count = chunks.len();
        let points = vectors
            .into_iter()
            .zip(chunks)
            .map(|(vector, chunk)| ChunkPoint::new(vector, chunk))
            .collect();

        self.repository.upsert(points).await?;

        Ok(count)
    }

    /// Embed the query text and return the nearest chunks.
    ///
    /// `k` is clamped to `[SEARCH_LIMIT_MIN, SEARCH_LIMIT_MAX]` before it
    /// reaches the store.
    pub async fn search(&self, query: &str, k: i64) -> MemoryResult<Vec<SearchHit>> {
        let limit = k.clamp(SEARCH_LIMIT_MIN, SEARCH_LIMIT_MAX) as u64;
        let vector = self.embedder.embed(query).await?;
        self.repository.search(vector, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbedder;
    use crate::models::point_id_for;
    use crate::repository::MockChunkRepository;

    fn chunk(id: &str, texto: &str) -> Chunk {
        Chunk {
            id: id.to_string(),
            titulo: "Title".to_string(),
            texto: texto.to_string(),
            tags: vec![],
            canonical: true,
        }
    }

    fn embedder_returning(vector: Vec<f32>) -> Arc<MockEmbedder> {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .returning(move |_| Ok(vector.clone()));
        Arc::new(embedder)
    }

    #[tokio::test]
    async fn add_chunk_embeds_texto_and_upserts_one_point() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .withf(|text| text == "o porto antigo")
            .times(1)
            .returning(|_| Ok(vec![0.1, 0.2]));

        let mut repository = MockChunkRepository::new();
        repository
            .expect_upsert()
            .withf(|points| {
                points.len() == 1
                    && points[0].id == point_id_for("capitulo-1")
                    && points[0].vector == vec![0.1, 0.2]
                    && points[0].payload.id == "capitulo-1"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = MemoryService::new(repository, Arc::new(embedder));
        let id = service
            .add_chunk(chunk("capitulo-1", "o porto antigo"))
            .await
            .unwrap();
        assert_eq!(id, "capitulo-1");
    }

    #[tokio::test]
    async fn add_chunk_propagates_store_failure() {
        let mut repository = MockChunkRepository::new();
        repository
            .expect_upsert()
            .returning(|_| Err(MemoryError::Store("connection refused".to_string())));

        let service = MemoryService::new(repository, embedder_returning(vec![0.0]));
        let err = service.add_chunk(chunk("x", "text")).await.unwrap_err();
        assert!(matches!(err, MemoryError::Store(_)));
    }

    #[tokio::test]
    async fn batch_embeds_once_and_upserts_once() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed_batch()
            .withf(|texts| texts == ["primeiro".to_string(), "segundo".to_string()])
            .times(1)
            .returning(|_| Ok(vec![vec![0.1], vec![0.2]]));

        let mut repository = MockChunkRepository::new();
        repository
            .expect_upsert()
            .withf(|points| {
                points.len() == 2
                    && points[0].payload.id == "a"
                    && points[1].payload.id == "b"
                    && points[1].vector == vec![0.2]
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = MemoryService::new(repository, Arc::new(embedder));
        let count = service
            .add_chunks_batch(vec![chunk("a", "primeiro"), chunk("b", "segundo")])
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn empty_batch_touches_nothing() {
        let embedder = MockEmbedder::new();
        let repository = MockChunkRepository::new();

        let service = MemoryService::new(repository, Arc::new(embedder));
        assert_eq!(service.add_chunks_batch(vec![]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn batch_rejects_embedding_count_mismatch() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed_batch()
            .returning(|_| Ok(vec![vec![0.1]]));

        let repository = MockChunkRepository::new();
        let service = MemoryService::new(repository, Arc::new(embedder));

        let err = service
            .add_chunks_batch(vec![chunk("a", "um"), chunk("b", "dois")])
            .await
            .unwrap_err();
        assert!(matches!(err, MemoryError::Embedding(_)));
    }

    #[tokio::test]
    async fn search_clamps_limit_to_range() {
        for (requested, expected) in [(0, 1), (-3, 1), (5, 5), (1000, 50)] {
            let mut repository = MockChunkRepository::new();
            repository
                .expect_search()
                .withf(move |_, limit| *limit == expected)
                .times(1)
                .returning(|_, _| Ok(vec![]));

            let service = MemoryService::new(repository, embedder_returning(vec![0.5]));
            service.search("query", requested).await.unwrap();
        }
    }

    #[tokio::test]
    async fn search_passes_query_embedding_to_store() {
        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .withf(|text| text == "quando a cidade surgiu?")
            .times(1)
            .returning(|_| Ok(vec![0.7, 0.7]));

        let mut repository = MockChunkRepository::new();
        repository
            .expect_search()
            .withf(|vector, _| vector == &[0.7, 0.7])
            .times(1)
            .returning(|_, _| {
                Ok(vec![SearchHit {
                    id: "capitulo-1".to_string(),
                    score: 0.93,
                    payload: None,
                }])
            });

        let service = MemoryService::new(repository, Arc::new(embedder));
        let hits = service.search("quando a cidade surgiu?", 5).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "capitulo-1");
    }
}
