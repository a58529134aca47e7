use axum::Json;
use serde_json::{json, Value};

pub const GREETING: &str = "GreenerCart API - Sustainable e-Commerce Platform";

pub async fn root() -> Json<Value> {
    Json(json!({ "message": GREETING }))
}

pub async fn health_check() -> &'static str {
    "OK"
}
