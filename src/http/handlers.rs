//! Route handlers for the frontend server.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;

/// Liveness report for the frontend itself (not the probed backend).
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// `GET /health`: container health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "frontend",
    })
}

/// Runtime configuration exposed to the served page.
#[derive(Serialize)]
pub struct FrontendConfig {
    pub backend_url: String,
}

/// `GET /config`: lets the page render the backend URL it talks to.
pub async fn frontend_config(State(state): State<AppState>) -> Json<FrontendConfig> {
    Json(FrontendConfig {
        backend_url: state.backend_url.as_ref().to_string(),
    })
}
