use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "link-server",
        "version": env!("CARGO_PKG_VERSION"),
        "entries": state.store.len(),
    }))
}
