//! 进程运行时：日志初始化与停止信号

use std::fmt;

use bada_config::AppConfig;
use bada_telemetry::{init_tracing, init_tracing_json};
use tracing::{error, info};

/// 初始化日志，生产环境输出 JSON
pub fn init_runtime(config: &AppConfig) {
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    let listen = format!("{}:{}", config.server.host, config.server.port);
    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        log_level = %config.telemetry.log_level,
        %listen,
        "Runtime initialized"
    );
}

/// 触发停止的信号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSignal::Interrupt => write!(f, "SIGINT"),
            StopSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// 等待 Ctrl+C 或 SIGTERM
///
/// 某个信号无法注册时只记录错误，继续等待另一个
pub async fn wait_for_stop() -> StopSignal {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => StopSignal::Interrupt,
        _ = terminate => StopSignal::Terminate,
    }
}

/// 供 `with_graceful_shutdown` 使用
pub async fn shutdown_signal() {
    let signal = wait_for_stop().await;
    info!(%signal, "Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_signal_names() {
        assert_eq!(StopSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(StopSignal::Terminate.to_string(), "SIGTERM");
    }
}
