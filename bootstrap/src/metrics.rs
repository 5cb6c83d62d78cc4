//! Metrics 模块

use bada_telemetry::init_metrics;
use metrics_exporter_prometheus::{BuildError, PrometheusHandle};

/// Prometheus 记录器句柄
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 recorder
    pub fn install() -> Result<Self, BuildError> {
        Ok(Self {
            handle: init_metrics()?,
        })
    }

    /// 获取 Prometheus 文本格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}
