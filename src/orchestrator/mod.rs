//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 批量加载文档（Vec<DocumentText>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 遍历单个文档的所有页（Vec<PageText>）
//! - 跳过没有可读文本的页
//! - 创建并复用 PageFlow
//! - 输出单个文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<DocumentText>)
//!     ↓
//! document_processor (处理 Vec<PageText>)
//!     ↓
//! workflow::PageFlow (处理单个 PageText)
//!     ↓
//! services (能力层：extract / persist / warn)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，document_processor 管单个
//! 2. **向下依赖**：编排层 → workflow → services
//! 3. **无业务逻辑**：只做调度和统计，不做具体提取判断

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchStats};
pub use document_processor::{process_document, DocumentStats};
