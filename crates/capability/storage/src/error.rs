//! 存储层错误类型
//!
//! 区分四类错误：
//! - 连接串非法（建池阶段）
//! - 数据库不可达或认证失败（启动时连通性检查）
//! - 语句执行或行解析失败
//! - 按 id 查询无结果

use domain::AlbumId;

/// 底层错误（sqlx 错误或内存实现的锁错误）。
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 连接串无法解析
    #[error("invalid connection descriptor: {0}")]
    Configuration(#[source] sqlx::Error),

    /// 数据库不可达或拒绝认证
    #[error("database unreachable: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// 语句执行或行解析失败，附带操作名与关键输入
    #[error("{operation} {input}: {source}")]
    Query {
        operation: &'static str,
        input: String,
        #[source]
        source: BoxError,
    },

    /// 按 id 查询未命中
    #[error("album_by_id {0}: no such album")]
    NotFound(AlbumId),
}

impl StorageError {
    pub fn query(
        operation: &'static str,
        input: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Query {
            operation,
            input: input.into(),
            source: source.into(),
        }
    }

    /// 是否为"记录不存在"（调用方可据此与查询故障分流）。
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
