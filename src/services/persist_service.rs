//! 持久化服务 - 业务能力层
//!
//! 只负责"把一页的提取结果写成文件"能力，不关心流程。
//! 持久身份（主键、外键）由下游消费方负责，这里只保证
//! 每页一个输出文件、文件名可定位到来源

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::question::ExtractedPage;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl OutputFormat {
    /// 从配置字符串解析输出格式
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toml" => Some(OutputFormat::Toml),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// 对应的文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Toml => "toml",
            OutputFormat::Json => "json",
        }
    }
}

/// 持久化服务
pub struct PersistService {
    output_folder: PathBuf,
    format: OutputFormat,
}

impl PersistService {
    /// 创建新的持久化服务
    ///
    /// 输出格式无法识别时返回配置错误
    pub fn new(config: &Config) -> AppResult<Self> {
        let format =
            OutputFormat::parse(&config.output_format).ok_or_else(|| AppError::Config {
                var: "OUTPUT_FORMAT".to_string(),
                value: config.output_format.clone(),
            })?;

        Ok(Self {
            output_folder: PathBuf::from(&config.output_folder),
            format,
        })
    }

    /// 将一页的提取结果写入输出目录
    ///
    /// # 参数
    /// - `page`: 一页的提取结果
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn persist_page(&self, page: &ExtractedPage) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| AppError::file(self.output_folder.to_string_lossy(), e))?;

        let file_name = format!(
            "{}_p{}.{}",
            page.document,
            page.page_number,
            self.format.extension()
        );
        let path = self.output_folder.join(file_name);

        let content = match self.format {
            OutputFormat::Toml => toml::to_string_pretty(page)
                .map_err(|e| AppError::persist(path.to_string_lossy(), e.to_string()))?,
            OutputFormat::Json => serde_json::to_string_pretty(page)
                .map_err(|e| AppError::persist(path.to_string_lossy(), e.to_string()))?,
        };

        fs::write(&path, content)
            .await
            .map_err(|e| AppError::file(path.to_string_lossy(), e))?;

        debug!("已写入: {}", path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("toml"), Some(OutputFormat::Toml));
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_bad_format_is_config_error() {
        let config = Config {
            output_format: "yaml".to_string(),
            ..Config::default()
        };

        assert!(PersistService::new(&config).is_err());
    }
}
