//! Health probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use jb_db::Store;
use serde_json::json;

/// State for the health routes. The store handle is optional so the probes
/// work (and report unready) before a store connection exists.
#[derive(Clone)]
pub struct HealthState {
    store: Option<Store>,
}

impl HealthState {
    pub fn new(store: Option<Store>) -> Self {
        Self { store }
    }
}

/// GET /health
pub async fn liveness() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/ready
pub async fn readiness(State(state): State<HealthState>) -> impl IntoResponse {
    let reachable = match &state.store {
        Some(store) => match store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Readiness check failed: {}", e);
                false
            }
        },
        None => false,
    };

    if reachable {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
    }
}
