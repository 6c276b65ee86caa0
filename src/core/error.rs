//! 核心错误处理模块
//!
//! GraphQL 查询错误不在这里建模，它们由引擎放进响应的 `errors` 中。
//! 这里只覆盖服务启动和运行期间的故障。

use std::io;

use crate::infrastructure::config::ConfigError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    #[error("日志初始化失败: {0}")]
    Logger(String),
    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("服务运行失败: {0}")]
    Serve(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
