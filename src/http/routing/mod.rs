pub mod todos;

use axum::{routing::get, Json, Router};

/// Compose the service banner route with the todo routes.
pub fn app(router: Router) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(router)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Todo API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
    }))
}
