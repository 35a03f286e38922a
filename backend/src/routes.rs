use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Health route plus the built frontend as static files. Unknown paths fall
/// back to `index.html` so client-side routes resolve after a full reload.
pub fn app(static_dir: &Path) -> Router {
    let static_service = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
