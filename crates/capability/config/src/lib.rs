//! 数据库连接配置加载。
//!
//! 凭据来自 `DBUSER`/`DBPASS`，主机、端口、库名和 TLS 模式使用固定默认值。
//! 凭据缺失时按空字符串处理，本层不做校验，由服务端在连通性检查时拒绝。
//! 连接参数由存储层逐字段构建，凭据不做 URL 拼接。

use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "recordings";
pub const DEFAULT_SSL_MODE: &str = "disable";
/// 默认最大连接数（连接池大小的唯一来源）
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 数据库连接配置。
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub ssl_mode: String,
    /// 完整连接串覆盖（`RECORDINGS_DATABASE_URL`），设置后忽略其余字段。
    pub url_override: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置（测试时可注入 HashMap）。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = lookup("DBUSER").unwrap_or_default();
        let password = lookup("DBPASS").unwrap_or_default();
        let url_override = read_optional(&lookup, "RECORDINGS_DATABASE_URL");
        let max_connections = read_u32_with_default(
            &lookup,
            "RECORDINGS_DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;

        Ok(Self {
            user,
            password,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            ssl_mode: DEFAULT_SSL_MODE.to_string(),
            url_override,
            max_connections,
        })
    }
}

fn read_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// 读取正整数，缺失时取默认值。
fn read_u32_with_default<F>(lookup: &F, key: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match read_optional(lookup, key) {
        Some(value) => value,
        None => return Ok(default),
    };
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}
