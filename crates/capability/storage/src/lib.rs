//! # Recordings Storage 模块
//!
//! 专辑数据访问层：连接池管理与三个单语句仓储操作。
//!
//! ## 模块说明
//!
//! - [`connection`]：PostgreSQL 连接池构建、连通性检查、关闭
//! - [`traits`]：`AlbumStore` 接口
//! - [`error`]：`StorageError`（区分 NotFound 与查询故障）
//! - [`postgres`]：`PgAlbumStore`，生产实现
//! - [`in_memory`]：`InMemoryAlbumStore`，测试与演示实现
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use recordings_config::DatabaseConfig;
//! use recordings_storage::{AlbumStore, PgAlbumStore, build_pool, verify_pool, close_pool};
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = build_pool(&config)?;
//! verify_pool(&pool).await?;
//! let store = PgAlbumStore::new(pool.clone());
//! let albums = store.albums_by_artist("John Coltrane").await?;
//! close_pool(&pool).await;
//! ```
//!
//! ## 并发
//!
//! 每次操作从连接池借出一个连接，执行一条语句后立即归还；
//! 连接池自身是唯一的共享资源，本层不额外加锁。

pub mod connection;
pub mod error;
pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use connection::*;
pub use error::*;
pub use traits::*;

pub use in_memory::InMemoryAlbumStore;
pub use postgres::PgAlbumStore;

pub use domain::{Album, AlbumId, NewAlbum};
