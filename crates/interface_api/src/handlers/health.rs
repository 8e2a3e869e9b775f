//! Liveness and readiness

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use core_kernel::{AdapterHealth, HealthCheckResult};

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<HealthCheckResult>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        store: None,
    })
}

/// Ready once the property store answers its health check
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let check = state.health.health_check().await;

    let (code, status) = match check.status {
        AdapterHealth::Healthy => (StatusCode::OK, "ready"),
        AdapterHealth::Unhealthy => {
            tracing::warn!(adapter = %check.adapter_id, message = ?check.message, "Store not ready");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store: Some(check),
        }),
    )
}
