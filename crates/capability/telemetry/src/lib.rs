//! 日志初始化。

use tracing_subscriber::{EnvFilter, fmt};

/// 初始化 tracing（默认 info，输出到 stderr）。
///
/// 重复调用是安全的：已安装全局订阅器时直接忽略。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
