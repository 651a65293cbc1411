use std::path::PathBuf;

use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少 API 凭证（环境变量或 .env.local 中均未找到）
    #[error("环境变量 {var_name} 不存在（请在环境或 .env.local 中设置）")]
    ApiKeyNotFound { var_name: String },

    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 题库文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("题库文件不存在: {}", path.display())]
    NotFound { path: PathBuf },

    /// 读取文件失败
    #[error("读取题库文件失败 ({}): {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入题库文件失败 ({}): {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON 解析失败
    #[error("JSON解析失败 ({}): {source}", path.display())]
    JsonParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {source}")]
    JsonSerializeFailed { source: serde_json::Error },
}
