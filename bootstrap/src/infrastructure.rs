//! 基础设施资源管理

use bada_adapter_postgres::{PostgresConfig, create_pool};
use bada_config::AppConfig;
use bada_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryPolicy, with_retry};

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化，服务通过访问器取用
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let policy = RetryPolicy::default();

        let db = &config.database;
        let pg_config = PostgresConfig::new(db.url.expose_secret())
            .with_application_name(&config.app_name)
            .with_connections(db.min_connections, db.max_connections)
            .with_acquire_timeout(db.acquire_timeout())
            .with_idle_timeout(db.idle_timeout());
        let postgres_pool = with_retry(&policy, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            min_connections = pg_config.min_connections,
            max_connections = pg_config.max_connections,
            acquire_timeout_secs = db.acquire_timeout_secs,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池（PgPool 内部为 Arc，克隆开销很小）
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}
