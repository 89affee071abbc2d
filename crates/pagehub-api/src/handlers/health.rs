//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// GET /api/v1/ping
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}
