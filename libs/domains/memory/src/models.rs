use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A stored text passage with metadata.
///
/// The wire field names (`titulo`, `texto`) are part of the service's JSON
/// contract and are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Chunk {
    /// Caller-supplied unique identifier; re-using an id overwrites.
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    /// Short human-readable label.
    pub titulo: String,
    /// Body passage the embedding is derived from.
    #[validate(length(min = 1, message = "texto must not be empty"))]
    pub texto: String,
    /// Labels; order has no semantic meaning but is preserved for display.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Marks the chunk as authoritative. Informational payload field only.
    #[serde(default = "default_canonical")]
    pub canonical: bool,
}

fn default_canonical() -> bool {
    true
}

impl Chunk {
    /// Deterministic point id for this chunk.
    pub fn point_id(&self) -> Uuid {
        point_id_for(&self.id)
    }
}

/// Map a caller-supplied string id onto a Qdrant-compatible point id.
///
/// Qdrant accepts only UUIDs or unsigned integers as point ids. Ids that
/// already parse as a UUID are used verbatim; any other string derives a
/// UUIDv5, so the same id always lands on the same point and upserts
/// overwrite instead of duplicating.
pub fn point_id_for(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap_or_else(|_| Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes()))
}

/// A chunk paired with its embedding, ready for upsert.
#[derive(Debug, Clone)]
pub struct ChunkPoint {
    pub id: Uuid,
    pub vector: Vec<f32>,
    pub payload: Chunk,
}

impl ChunkPoint {
    pub fn new(vector: Vec<f32>, payload: Chunk) -> Self {
        Self {
            id: payload.point_id(),
            vector,
            payload,
        }
    }
}

/// A ranked search result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchHit {
    /// The stored chunk's id. Falls back to the raw point id when the
    /// payload cannot be decoded.
    pub id: String,
    /// Similarity score; higher means more similar under cosine distance.
    pub score: f32,
    /// The chunk as persisted at upsert time.
    pub payload: Option<Chunk>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn chunk(id: &str) -> Chunk {
        Chunk {
            id: id.to_string(),
            titulo: "Title".to_string(),
            texto: "Body text".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            canonical: true,
        }
    }

    #[test]
    fn point_id_is_deterministic() {
        assert_eq!(point_id_for("capitulo-1"), point_id_for("capitulo-1"));
        assert_ne!(point_id_for("capitulo-1"), point_id_for("capitulo-2"));
    }

    #[test]
    fn point_id_passes_uuid_through() {
        let raw = "2c5ea4c0-4067-11e9-8bad-9b1deb4d3b7d";
        assert_eq!(point_id_for(raw), Uuid::parse_str(raw).unwrap());
    }

    #[test]
    fn chunk_point_derives_id_from_payload() {
        let c = chunk("capitulo-1");
        let point = ChunkPoint::new(vec![0.0; 4], c.clone());
        assert_eq!(point.id, c.point_id());
    }

    #[test]
    fn deserialization_applies_defaults() {
        let c: Chunk =
            serde_json::from_str(r#"{"id": "x", "titulo": "t", "texto": "body"}"#).unwrap();
        assert!(c.tags.is_empty());
        assert!(c.canonical);
    }

    #[test]
    fn empty_id_and_texto_fail_validation() {
        let mut c = chunk("x");
        c.id = String::new();
        assert!(c.validate().is_err());

        let mut c = chunk("x");
        c.texto = String::new();
        assert!(c.validate().is_err());

        assert!(chunk("x").validate().is_ok());
    }
}
