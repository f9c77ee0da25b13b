//! 单个文档处理器 - 编排层
//!
//! 遍历单个文档的所有页，创建并复用 PageFlow

use crate::config::Config;
use crate::models::question::DocumentText;
use crate::workflow::{PageCtx, PageFlow, PageOutcome};
use anyhow::Result;
use tracing::{error, info, warn};

/// 单个文档的处理统计
#[derive(Debug, Default)]
pub struct DocumentStats {
    /// 成功导入的页数
    pub imported_pages: usize,
    /// 没有可读文本的页数
    pub blank_pages: usize,
    /// 有文本但没有提取出题目的页数
    pub empty_pages: usize,
    /// 处理失败的页数
    pub failed_pages: usize,
    /// 提取出的题目总数
    pub questions: usize,
    /// 提取出的答案总数
    pub answers: usize,
}

/// 处理单个文档
///
/// # 参数
/// - `document`: 文档数据
/// - `document_index`: 文档索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回该文档的处理统计
pub async fn process_document(
    document: &DocumentText,
    document_index: usize,
    config: &Config,
) -> Result<DocumentStats> {
    log_document_start(document_index, &document.name, document.pages.len());

    let flow = PageFlow::new(config)?;
    let mut stats = DocumentStats::default();

    for page in &document.pages {
        // 没有可读文本的页（扫描件等）直接跳过，不进入提取流程
        if page.is_blank() {
            warn!(
                "[文档 {}] ⚠️ 第 {} 页没有可读文本，跳过",
                document_index, page.page_number
            );
            stats.blank_pages += 1;
            continue;
        }

        let ctx = PageCtx::new(document.name.clone(), document_index, page.page_number);

        match flow.run(page, &ctx).await {
            Ok(PageOutcome::Imported { questions, answers }) => {
                stats.imported_pages += 1;
                stats.questions += questions;
                stats.answers += answers;
            }
            Ok(PageOutcome::Blank) => {
                stats.blank_pages += 1;
            }
            Ok(PageOutcome::NoQuestions) => {
                stats.empty_pages += 1;
            }
            Err(e) => {
                error!(
                    "[文档 {}] 第 {} 页处理失败: {}",
                    document_index, page.page_number, e
                );
                stats.failed_pages += 1;
            }
        }
    }

    log_document_complete(document_index, &stats, document.pages.len());

    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_document_start(document_index: usize, name: &str, page_count: usize) {
    info!("[文档 {}] 开始处理", document_index);
    info!("[文档 {}] 名称: {}", document_index, name);
    info!("[文档 {}] 页数: {}", document_index, page_count);
}

fn log_document_complete(document_index: usize, stats: &DocumentStats, total: usize) {
    info!(
        "[文档 {}] 页统计: 导入 {}, 空白 {}, 零产出 {}, 失败 {}, 总计 {}",
        document_index,
        stats.imported_pages,
        stats.blank_pages,
        stats.empty_pages,
        stats.failed_pages,
        total
    );
    info!(
        "[文档 {}] 共提取 {} 道题目 / {} 个答案",
        document_index, stats.questions, stats.answers
    );
    info!("\n[文档 {}] ✅ 文档处理完成\n", document_index);
}
