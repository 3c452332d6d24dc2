//! # PostgreSQL 存储实现模块
//!
//! ## 数据库模式要求
//!
//! - `album`：专辑表（id BIGSERIAL, title, artist, price DECIMAL(5,2) 或 REAL）
//!
//! 参考建表脚本见仓库根目录 `db/create-tables.sql`，程序本身不执行迁移。
//!
//! ## 查询约定
//!
//! - 所有 SQL 使用参数绑定（`$1`, `$2` 等），禁止字符串拼接
//! - 行按列名解码，不依赖 `SELECT *` 的列顺序
//! - 价格按列类型解码（FLOAT4 / FLOAT8 / NUMERIC），统一转换为 f32
//! - 插入使用 `RETURNING id`，一次往返拿到新 id
//! - 单语句自动提交，不使用事务

pub mod album;

pub use album::*;
