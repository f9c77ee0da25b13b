//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将未能提取出任何题目的页写入 warn.txt
/// - 只处理单页的警告
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `document`: 文档名称
    /// - `page_number`: 页码
    /// - `reason`: 原因说明
    pub async fn write(&self, document: &str, page_number: usize, reason: &str) -> AppResult<()> {
        debug!(
            "写入警告: 文档 {} | 页 {} | 原因: {}",
            document, page_number, reason
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| AppError::file(&self.warn_file_path, e))?;

        let warn_msg = format!("文档 {} | 页 {} | {}\n", document, page_number, reason);

        file.write_all(warn_msg.as_bytes())
            .map_err(|e| AppError::file(&self.warn_file_path, e))?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
