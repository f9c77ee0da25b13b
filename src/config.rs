/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 已提取文本页所在目录（每个 txt 文件对应一个文档）
    pub pages_folder: String,
    /// 题目文件输出目录
    pub output_folder: String,
    /// 输出格式（toml / json）
    pub output_format: String,
    /// 警告文件路径
    pub warn_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否保留没有任何答案的题目
    pub keep_unanswered: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_folder: "extracted_pages".to_string(),
            output_folder: "output_questions".to_string(),
            output_format: "toml".to_string(),
            warn_file: "warn.txt".to_string(),
            output_log_file: "output.txt".to_string(),
            max_concurrent_documents: 4,
            keep_unanswered: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            pages_folder: std::env::var("PAGES_FOLDER").unwrap_or(default.pages_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            output_format: std::env::var("OUTPUT_FORMAT").unwrap_or(default.output_format),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            max_concurrent_documents: std::env::var("MAX_CONCURRENT_DOCUMENTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_documents),
            keep_unanswered: std::env::var("KEEP_UNANSWERED").ok().and_then(|v| v.parse().ok()).unwrap_or(default.keep_unanswered),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
