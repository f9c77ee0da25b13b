use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件操作失败 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 持久化错误（序列化失败等）
    #[error("持久化失败 ({path}): {message}")]
    Persist { path: String, message: String },

    /// 配置错误
    #[error("配置项 {var} 无效: '{value}'")]
    Config { var: String, value: String },

    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件操作错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }

    /// 创建持久化错误
    pub fn persist(path: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Persist {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
