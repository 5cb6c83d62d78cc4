//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bada_config::AppConfig;
use bada_errors::AppResult;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 启动顺序：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 metrics 记录器
/// 4. 创建基础设施资源（数据库连接池，带重试）
/// 5. 调用闭包构建业务路由（可在其中执行迁移与初始数据）
/// 6. 合并健康检查路由，启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use bada_bootstrap::run_http_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http_server("config", |infra| async move {
///         Ok(my_router(infra.postgres_pool()))
///     }).await
/// }
/// ```
pub async fn run_http_server<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Arc<Infrastructure>) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = Arc::new(MetricsRecorder::install()?);

    let infra = Arc::new(Infrastructure::from_config(config.clone()).await?);

    let router = router_builder(infra.clone())
        .await?
        .merge(health_routes(infra.clone(), metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    infra.postgres_pool().close().await;

    info!("Service stopped");

    Ok(())
}
