use axum::Json;

/// GET /healthz, a liveness probe for the badge server itself.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
