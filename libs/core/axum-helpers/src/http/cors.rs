use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer allowing any origin.
///
/// Tighten to the publishing domain before exposing the service publicly.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
