//! 存储接口 Trait 定义
//!
//! 设计原则：
//! - 每个操作只执行一条语句，不跨操作持有状态
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use async_trait::async_trait;
use domain::{Album, AlbumId, NewAlbum};

/// 专辑存储接口
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// 按艺人查询专辑，无匹配时返回空列表
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, StorageError>;

    /// 按 id 查询专辑，未命中返回 `StorageError::NotFound`
    async fn album_by_id(&self, id: AlbumId) -> Result<Album, StorageError>;

    /// 插入专辑，返回数据库分配的 id
    async fn add_album(&self, album: NewAlbum) -> Result<AlbumId, StorageError>;
}
