use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::qdrant::{
    self, CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder,
    UpsertPointsBuilder, Value as QdrantValue, VectorParamsBuilder,
};
use qdrant_client::Qdrant;
use tracing::info;

use super::QdrantConfig;
use crate::error::{MemoryError, MemoryResult};
use crate::models::{Chunk, ChunkPoint, SearchHit};
use crate::repository::ChunkRepository;

/// Qdrant-backed implementation of [`ChunkRepository`].
///
/// One repository instance serves one collection.
pub struct QdrantChunkRepository {
    client: Qdrant,
    collection: String,
}

impl QdrantChunkRepository {
    pub fn new(config: QdrantConfig, collection: impl Into<String>) -> MemoryResult<Self> {
        let mut builder = Qdrant::from_url(&config.url);

        if let Some(api_key) = config.api_key {
            builder = builder.api_key(api_key);
        }

        builder = builder.timeout(Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| MemoryError::Store(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            collection: collection.into(),
        })
    }

    fn chunk_to_payload(chunk: &Chunk) -> MemoryResult<HashMap<String, QdrantValue>> {
        let serde_json::Value::Object(map) = serde_json::to_value(chunk)? else {
            return Err(MemoryError::Internal(
                "Chunk did not serialize to an object".to_string(),
            ));
        };

        Ok(map
            .into_iter()
            .map(|(key, val)| (key, json_to_qdrant_value(val)))
            .collect())
    }

    /// Decode a stored payload back into a [`Chunk`].
    ///
    /// Undecodable payloads yield `None` instead of failing the whole
    /// search response.
    fn payload_to_chunk(payload: HashMap<String, QdrantValue>) -> Option<Chunk> {
        if payload.is_empty() {
            return None;
        }

        let map: serde_json::Map<String, serde_json::Value> = payload
            .into_iter()
            .filter_map(|(key, val)| qdrant_value_to_json(val).map(|json| (key, json)))
            .collect();

        serde_json::from_value(serde_json::Value::Object(map)).ok()
    }

    fn point_id_to_string(point_id: &qdrant::PointId) -> Option<String> {
        match &point_id.point_id_options {
            Some(qdrant::point_id::PointIdOptions::Uuid(uuid)) => Some(uuid.clone()),
            Some(qdrant::point_id::PointIdOptions::Num(num)) => Some(num.to_string()),
            None => None,
        }
    }
}

fn json_to_qdrant_value(val: serde_json::Value) -> QdrantValue {
    use qdrant::value::Kind;

    let kind = match val {
        serde_json::Value::Null => Kind::NullValue(0),
        serde_json::Value::Bool(b) => Kind::BoolValue(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Kind::IntegerValue(i)
            } else {
                Kind::DoubleValue(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Kind::StringValue(s),
        serde_json::Value::Array(items) => Kind::ListValue(qdrant::ListValue {
            values: items.into_iter().map(json_to_qdrant_value).collect(),
        }),
        serde_json::Value::Object(map) => Kind::StructValue(qdrant::Struct {
            fields: map
                .into_iter()
                .map(|(key, val)| (key, json_to_qdrant_value(val)))
                .collect(),
        }),
    };

    QdrantValue { kind: Some(kind) }
}

fn qdrant_value_to_json(val: QdrantValue) -> Option<serde_json::Value> {
    use qdrant::value::Kind;

    match val.kind? {
        Kind::NullValue(_) => Some(serde_json::Value::Null),
        Kind::BoolValue(b) => Some(serde_json::Value::Bool(b)),
        Kind::IntegerValue(i) => Some(serde_json::Value::Number(i.into())),
        Kind::DoubleValue(f) => serde_json::Number::from_f64(f).map(serde_json::Value::Number),
        Kind::StringValue(s) => Some(serde_json::Value::String(s)),
        Kind::ListValue(list) => Some(serde_json::Value::Array(
            list.values
                .into_iter()
                .filter_map(qdrant_value_to_json)
                .collect(),
        )),
        Kind::StructValue(fields) => Some(serde_json::Value::Object(
            fields
                .fields
                .into_iter()
                .filter_map(|(key, val)| qdrant_value_to_json(val).map(|json| (key, json)))
                .collect(),
        )),
    }
}

#[async_trait]
impl ChunkRepository for QdrantChunkRepository {
    async fn ensure_collection(&self, dimension: u64) -> MemoryResult<()> {
        let collections = self.client.list_collections().await?;
        if collections
            .collections
            .iter()
            .any(|c| c.name == self.collection)
        {
            return Ok(());
        }

        info!(
            "Creating collection '{}' ({} dimensions, cosine distance)",
            self.collection, dimension
        );
        self.client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection)
                    .vectors_config(VectorParamsBuilder::new(dimension, Distance::Cosine)),
            )
            .await?;

        Ok(())
    }

    async fn upsert(&self, points: Vec<ChunkPoint>) -> MemoryResult<()> {
        let points = points
            .into_iter()
            .map(|point| {
                Ok(PointStruct::new(
                    point.id.to_string(),
                    point.vector,
                    Self::chunk_to_payload(&point.payload)?,
                ))
            })
            .collect::<MemoryResult<Vec<_>>>()?;

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection, points).wait(true))
            .await?;

        Ok(())
    }

    async fn search(&self, vector: Vec<f32>, limit: u64) -> MemoryResult<Vec<SearchHit>> {
        let response = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, vector, limit).with_payload(true),
            )
            .await?;

        Ok(response
            .result
            .into_iter()
            .map(|point| {
                let payload = Self::payload_to_chunk(point.payload);
                let id = payload
                    .as_ref()
                    .map(|chunk| chunk.id.clone())
                    .or_else(|| point.id.as_ref().and_then(Self::point_id_to_string))
                    .unwrap_or_default();

                SearchHit {
                    id,
                    score: point.score,
                    payload,
                }
            })
            .collect())
    }
}
