//! 专辑内存存储实现
//!
//! 功能：
//! - 可选内置种子数据（与 `db/create-tables.sql` 一致）
//! - 按艺人查询、按 id 查询、插入

use crate::error::StorageError;
use crate::traits::AlbumStore;
use domain::{Album, AlbumId, NewAlbum};
use std::collections::BTreeMap;
use std::sync::RwLock;

struct AlbumTable {
    rows: BTreeMap<AlbumId, Album>,
    next_id: AlbumId,
}

/// 专辑内存存储
///
/// 使用 RwLock + BTreeMap 提供线程安全的内存存储，id 分配与写入在同一把写锁内完成。
pub struct InMemoryAlbumStore {
    table: RwLock<AlbumTable>,
}

impl InMemoryAlbumStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(AlbumTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// 内置种子专辑
    ///
    /// 包含 4 张专辑，其中 John Coltrane 两张（id 1、2）。
    pub fn with_seed_albums() -> Self {
        let seeds = [
            NewAlbum::new("Blue Train", "John Coltrane", 56.99),
            NewAlbum::new("Giant Steps", "John Coltrane", 63.99),
            NewAlbum::new("Jeru", "Gerry Mulligan", 17.99),
            NewAlbum::new("Sarah Vaughan", "Sarah Vaughan", 34.98),
        ];
        let mut rows = BTreeMap::new();
        let mut next_id = 1;
        for seed in seeds {
            rows.insert(next_id, seed.with_id(next_id));
            next_id += 1;
        }
        Self {
            table: RwLock::new(AlbumTable { rows, next_id }),
        }
    }
}

impl Default for InMemoryAlbumStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AlbumStore for InMemoryAlbumStore {
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<Album>, StorageError> {
        let table = self.table.read().map_err(|_| {
            StorageError::query("albums_by_artist", format!("{artist:?}"), "lock failed")
        })?;
        let albums = table
            .rows
            .values()
            .filter(|album| album.artist == artist)
            .cloned()
            .collect();
        Ok(albums)
    }

    async fn album_by_id(&self, id: AlbumId) -> Result<Album, StorageError> {
        let table = self
            .table
            .read()
            .map_err(|_| StorageError::query("album_by_id", id.to_string(), "lock failed"))?;
        table.rows.get(&id).cloned().ok_or(StorageError::NotFound(id))
    }

    async fn add_album(&self, album: NewAlbum) -> Result<AlbumId, StorageError> {
        let mut table = self.table.write().map_err(|_| {
            StorageError::query("add_album", format!("{:?}", album.title), "lock failed")
        })?;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, album.with_id(id));
        Ok(id)
    }
}
