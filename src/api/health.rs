//! Health, liveness and readiness endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;

use super::state::AppState;
use crate::domain::DomainError;

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ms: u64,
}

impl HealthCheck {
    fn from_result(name: &str, start: Instant, result: Result<usize, DomainError>) -> Self {
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(records) => Self {
                name: name.to_string(),
                status: HealthStatus::Healthy,
                records: Some(records),
                message: None,
                latency_ms,
            },
            Err(e) => {
                error!(check = %name, error = %e, "Readiness check failed");

                Self {
                    name: name.to_string(),
                    status: HealthStatus::Unhealthy,
                    records: None,
                    message: Some(e.code().to_string()),
                    latency_ms,
                }
            }
        }
    }
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check: both account sources must be readable and well formed
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let checks = vec![check_users_source(&state).await, check_groups_source(&state).await];

    let overall_status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_users_source(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.user_service.all_users().await.map(|users| users.len());
    HealthCheck::from_result("users_source", start, result)
}

async fn check_groups_source(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = state.group_service.all_groups().await.map(|groups| groups.len());
    HealthCheck::from_result("groups_source", start, result)
}
