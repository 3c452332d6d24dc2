//! 数据库连接管理
//!
//! 连接池生命周期：
//! - connect_options：由配置逐字段构建连接参数（不经过 URL 拼接）
//! - build_pool：创建惰性连接池（不建立网络连接）
//! - verify_pool：启动时的唯一一次连通性检查
//! - verify_or_close：检查失败时关闭连接池
//! - close_pool：释放所有连接
//! - connect_pool：build_pool + verify_or_close
//!
//! 注意：连接被拒绝时 sqlx 会持续重试，直到 `acquire_timeout`（默认 30 秒）
//! 才返回错误，因此数据库未启动时 verify_pool 不会立即失败。

use crate::error::StorageError;
use recordings_config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};
use std::str::FromStr;
use tracing::info;

/// 由配置构建连接参数
///
/// 设置了 `url_override` 时解析该连接串；否则逐字段设置，
/// 凭据中的 `/`、`#`、`?`、`%` 等字符按字面传递。
///
/// # 返回
/// - 连接串或 TLS 模式无法解析时返回 `StorageError::Configuration`
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, StorageError> {
    if let Some(url) = &config.url_override {
        return PgConnectOptions::from_str(url).map_err(StorageError::Configuration);
    }
    let ssl_mode = PgSslMode::from_str(&config.ssl_mode).map_err(StorageError::Configuration)?;
    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(ssl_mode))
}

/// 连接池参数：仅设置最大连接数，其余沿用 sqlx 默认值
pub fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(max_connections)
}

/// 创建 Postgres 连接池
///
/// 连接在首次使用时建立；需在 Tokio 运行时内调用。
pub fn build_pool(config: &DatabaseConfig) -> Result<PgPool, StorageError> {
    let options = connect_options(config)?;
    Ok(build_pool_with(options, pool_options(config.max_connections)))
}

/// 以显式的连接参数和连接池参数创建惰性连接池
pub fn build_pool_with(options: PgConnectOptions, pool_options: PgPoolOptions) -> PgPool {
    info!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        max_connections = pool_options.get_max_connections(),
        "building connection pool"
    );
    pool_options.connect_lazy_with(options)
}

/// 连通性检查：取出一个连接并 ping。
pub async fn verify_pool(pool: &PgPool) -> Result<(), StorageError> {
    let mut conn = pool.acquire().await.map_err(StorageError::Connectivity)?;
    conn.ping().await.map_err(StorageError::Connectivity)?;
    info!("database connection verified");
    Ok(())
}

/// 连通性检查，失败时先关闭连接池再返回错误。
pub async fn verify_or_close(pool: &PgPool) -> Result<(), StorageError> {
    if let Err(err) = verify_pool(pool).await {
        close_pool(pool).await;
        return Err(err);
    }
    Ok(())
}

/// 关闭连接池，等待借出的连接归还后返回。
pub async fn close_pool(pool: &PgPool) {
    pool.close().await;
    info!("connection pool closed");
}

/// 建立并校验 Postgres 连接池。
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, StorageError> {
    let pool = build_pool(config)?;
    verify_or_close(&pool).await?;
    Ok(pool)
}
