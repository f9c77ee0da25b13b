//! 页处理流程 - 流程层
//!
//! 核心职责：定义"一页文本"的完整处理流程
//!
//! 流程顺序：
//! 1. 提取题目记录
//! 2. 有记录 → 持久化
//! 3. 没有记录 → warn.txt（兜底）

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::question::{ExtractedPage, PageText, QuestionRecord};
use crate::services::{Extractor, PersistService, WarnWriter};
use crate::utils::logging::truncate_text;
use crate::workflow::page_ctx::PageCtx;

/// 页处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// 成功导入
    Imported {
        /// 该页提取出的题目数
        questions: usize,
        /// 该页提取出的答案数
        answers: usize,
    },
    /// 该页没有可读文本（扫描件等）
    Blank,
    /// 有文本但没有提取出任何题目
    NoQuestions,
}

/// 页处理流程
///
/// - 编排完整的单页处理流程
/// - 决定何时提取、何时持久化、何时兜底
/// - 只依赖业务能力（services）
pub struct PageFlow {
    extractor: Extractor,
    persist_service: PersistService,
    warn_writer: WarnWriter,
    verbose_logging: bool,
}

impl PageFlow {
    /// 创建新的页处理流程
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: Extractor::from_config(config),
            persist_service: PersistService::new(config)?,
            warn_writer: WarnWriter::with_path(&config.warn_file),
            verbose_logging: config.verbose_logging,
        })
    }

    /// 处理单页文本
    ///
    /// # 参数
    /// - `page`: 页文本数据
    /// - `ctx`: 页上下文
    ///
    /// # 返回
    /// 返回页处理结果
    pub async fn run(&self, page: &PageText, ctx: &PageCtx) -> Result<PageOutcome> {
        // 没有可读文本的页由调用方先行跳过，这里兜底再查一次
        if page.is_blank() {
            warn!(
                "[文档 {}] ⚠️ 第 {} 页没有可读文本，跳过",
                ctx.document_index, ctx.page_number
            );
            return Ok(PageOutcome::Blank);
        }

        // 提取题目
        let records = self.extractor.extract(&page.text);

        if records.is_empty() {
            warn!(
                "[文档 {}] ⚠️ 第 {} 页未提取出任何题目，写入 warn.txt",
                ctx.document_index, ctx.page_number
            );
            self.warn_writer
                .write(&ctx.document, ctx.page_number, "未提取出任何题目")
                .await?;
            return Ok(PageOutcome::NoQuestions);
        }

        let question_count = records.len();
        let answer_count: usize = records.iter().map(|q| q.answers.len()).sum();

        info!(
            "[文档 {}] ✓ 第 {} 页提取出 {} 道题目 / {} 个答案",
            ctx.document_index, ctx.page_number, question_count, answer_count
        );

        // 详细日志（如果启用）
        if self.verbose_logging {
            self.log_records(ctx, &records);
        }

        // 持久化
        let extracted = ExtractedPage {
            document: ctx.document.clone(),
            page_number: ctx.page_number,
            imported_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            questions: records,
        };

        let path = self.persist_service.persist_page(&extracted).await?;

        info!(
            "[文档 {}] 📤 第 {} 页已保存: {}",
            ctx.document_index,
            ctx.page_number,
            path.display()
        );

        Ok(PageOutcome::Imported {
            questions: question_count,
            answers: answer_count,
        })
    }

    // ========== 日志辅助方法 ==========

    /// 显示提取出的题干预览
    fn log_records(&self, ctx: &PageCtx, records: &[QuestionRecord]) {
        for (i, record) in records.iter().take(2).enumerate() {
            info!(
                "[文档 {}]   {}. 题干: {}",
                ctx.document_index,
                i + 1,
                truncate_text(&record.prompt, 80)
            );
        }
    }
}
