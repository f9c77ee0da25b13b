//! # Quiz PDF Import
//!
//! 一个从试题 PDF 的已提取文本中恢复结构化题目/答案记录的批处理工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单页文本
//! - `Extractor` - 行扫描状态机，纯函数式提取能力
//! - `PersistService` - 写题目文件能力
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一页文本"的完整处理流程
//! - `PageCtx` - 上下文封装（document + page_number）
//! - `PageFlow` - 流程编排（extract → persist → warn）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发
//! - `orchestrator/document_processor` - 单个文档处理器，遍历页列表
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::question::{AnswerRecord, DocumentText, ExtractedPage, PageText, QuestionRecord};
pub use models::{load_all_text_files, load_text_to_document};
pub use orchestrator::{process_document, App, BatchStats, DocumentStats};
pub use services::{extract_questions_and_answers, Extractor, OutputFormat, PersistService, WarnWriter};
pub use workflow::{PageCtx, PageFlow, PageOutcome};
