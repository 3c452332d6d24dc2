//! 内存存储实现模块
//!
//! 仅用于本地演示和测试，语义与 Postgres 实现一致：
//! - id 从 1 开始单调递增
//! - 列表按 id 升序返回

pub mod album;

pub use album::*;
