//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点，与业务路由合并在同一个 HTTP 服务上

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use bada_adapter_postgres::check_connection;
use serde::Serialize;

use crate::infrastructure::Infrastructure;
use crate::metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
            latency_ms: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = Some(latency.as_millis() as u64);
        self
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
            latency_ms: None,
        }
    }
}

/// 健康检查器
#[derive(Clone)]
pub struct HealthChecker {
    infra: Arc<Infrastructure>,
}

impl HealthChecker {
    pub fn new(infra: Arc<Infrastructure>) -> Self {
        Self { infra }
    }

    /// 存活检查，不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 就绪检查
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();
        let pool = self.infra.postgres_pool();
        let check = match check_connection(&pool).await {
            Ok(latency) => ComponentHealth::healthy("postgres").with_latency(latency),
            Err(e) => ComponentHealth::unhealthy("postgres", e.message()),
        };
        status.add_check(check);
        status
    }
}

#[derive(Clone)]
struct HealthState {
    checker: HealthChecker,
    metrics: Arc<MetricsRecorder>,
}

/// 构建健康检查路由
pub fn health_routes(infra: Arc<Infrastructure>, metrics: Arc<MetricsRecorder>) -> Router {
    let state = HealthState {
        checker: HealthChecker::new(infra),
        metrics,
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    Json(state.checker.liveness().await)
}

async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    (
        [("content-type", "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhealthy_check_degrades_status() {
        let mut status = HealthStatus::healthy();
        status.add_check(ComponentHealth::healthy("postgres"));
        assert!(status.is_healthy());

        status.add_check(ComponentHealth::unhealthy("postgres", "connection refused"));
        assert!(!status.is_healthy());
        assert_eq!(status.checks.len(), 2);
    }

    #[test]
    fn test_healthy_component_omits_message() {
        let json = serde_json::to_value(ComponentHealth::healthy("postgres")).unwrap();
        assert!(json.get("message").is_none());
        assert!(json.get("latency_ms").is_none());
    }

    #[test]
    fn test_latency_reported_in_millis() {
        let check = ComponentHealth::healthy("postgres").with_latency(Duration::from_micros(3_500));
        let json = serde_json::to_value(check).unwrap();
        assert_eq!(json["latency_ms"], 3);
    }
}
