//! PostgreSQL 连接池

use std::time::{Duration, Instant};

use bada_errors::{AppError, AppResult};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::debug;

/// 连接池参数
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    /// 写入 `pg_stat_activity.application_name`
    pub application_name: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    /// 获取连接的等待上限
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            application_name: None,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// 设置连接数范围，最小值不超过最大值
    pub fn with_connections(mut self, min: u32, max: u32) -> Self {
        self.max_connections = max.max(1);
        self.min_connections = min.min(self.max_connections);
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    fn connect_options(&self) -> AppResult<PgConnectOptions> {
        let options: PgConnectOptions = self
            .url
            .parse()
            .map_err(|e| AppError::validation(format!("Invalid database url: {}", e)))?;

        Ok(match &self.application_name {
            Some(name) => options.application_name(name),
            None => options,
        })
    }
}

/// 创建连接池
///
/// 地址格式错误返回校验错误，连接失败返回数据库错误
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    let options = config.connect_options()?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))
}

/// 检查数据库连接，返回往返耗时
pub async fn check_connection(pool: &PgPool) -> AppResult<Duration> {
    let started = Instant::now();
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;

    let elapsed = started.elapsed();
    debug!(
        latency_ms = elapsed.as_millis() as u64,
        pool_size = pool.size(),
        idle = pool.num_idle(),
        "Database reachable"
    );
    Ok(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_connections_capped_by_max() {
        let config = PostgresConfig::new("postgres://localhost/bada").with_connections(20, 5);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 5);

        let config = PostgresConfig::new("postgres://localhost/bada").with_connections(0, 0);
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 0);
    }

    #[test]
    fn test_application_name_applied_to_options() {
        let options = PostgresConfig::new("postgres://localhost:5432/bada")
            .with_application_name("inventory")
            .connect_options()
            .unwrap();
        assert_eq!(options.get_application_name(), Some("inventory"));
        assert_eq!(options.get_database(), Some("bada"));
    }

    #[test]
    fn test_invalid_url_is_validation_error() {
        let err = PostgresConfig::new("not a url").connect_options().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
