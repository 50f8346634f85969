//! HTTP surface: routes mapping 1:1 to memory service operations.

pub mod chunks;
pub mod health;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the API router with all endpoints.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/chunks", post(chunks::add_chunk))
        .route("/chunks/batch", post(chunks::add_chunks_batch))
        .route("/search", get(search::search))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use core_config::{app_info, server::ServerConfig, Environment};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            collection: "historia".to_string(),
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_answers_without_store_or_model() {
        let response = routes(test_state())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"ok": true, "collection": "historia"}));
    }

    #[tokio::test]
    async fn add_chunk_rejects_empty_texto_before_any_backend() {
        let payload = serde_json::json!({
            "id": "capitulo-1",
            "titulo": "A fundação",
            "texto": "",
        });

        let response = routes(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chunks")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["texto"].is_array());
    }

    #[tokio::test]
    async fn batch_rejects_invalid_member() {
        let payload = serde_json::json!([
            {"id": "a", "titulo": "t", "texto": "conteúdo"},
            {"id": "", "titulo": "t", "texto": "conteúdo"},
        ]);

        let response = routes(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chunks/batch")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_requires_query_text() {
        let response = routes(test_state())
            .oneshot(
                Request::builder()
                    .uri("/search?k=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
