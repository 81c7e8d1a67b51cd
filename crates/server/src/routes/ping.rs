use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn ping() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })),
    )
}
