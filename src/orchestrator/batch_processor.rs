//! 批量文档处理器 - 编排层
//!
//! 管理应用生命周期、批量加载与并发调度

use crate::config::Config;
use crate::models::question::DocumentText;
use crate::orchestrator::document_processor;
use crate::utils::logging;
use anyhow::Result;
use futures::future::join_all;
use std::fs;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 批量处理统计
#[derive(Debug, Default)]
pub struct BatchStats {
    /// 成功处理的文档数
    pub success: usize,
    /// 失败的文档数
    pub failed: usize,
    /// 文档总数
    pub total: usize,
    /// 提取出的题目总数
    pub questions: usize,
    /// 提取出的答案总数
    pub answers: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config)?;

        logging::log_startup(config.max_concurrent_documents);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<BatchStats> {
        // 加载所有待处理的文档
        info!("\n📁 正在扫描待处理的文档...");
        let documents = crate::models::load_all_text_files(&self.config.pages_folder).await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的文本文件，程序结束");
            return Ok(BatchStats::default());
        }

        let total = documents.len();
        logging::log_documents_loaded(total, self.config.max_concurrent_documents);

        // 处理所有文档
        let stats = self.process_all_documents(documents).await?;

        // 输出最终统计
        logging::print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            stats.questions,
            stats.answers,
            &self.config.output_log_file,
        );

        Ok(stats)
    }

    /// 分批处理所有文档
    async fn process_all_documents(&self, documents: Vec<DocumentText>) -> Result<BatchStats> {
        let batch_size = self.config.max_concurrent_documents;
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = documents.len();

        let mut stats = BatchStats {
            total,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(total);
            let batch = &documents[batch_start..batch_end];
            let batch_num = batch_start / batch_size + 1;
            let total_batches = (total + batch_size - 1) / batch_size;

            logging::log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total);

            // 为本批创建并发任务
            let mut handles = Vec::new();

            for (idx, document) in batch.iter().enumerate() {
                let document_index = batch_start + idx + 1;
                let permit = semaphore.clone().acquire_owned().await?;
                let document: DocumentText = document.clone();
                let config = self.config.clone();

                handles.push(tokio::spawn(async move {
                    let _permit = permit;
                    match document_processor::process_document(&document, document_index, &config)
                        .await
                    {
                        Ok(doc_stats) => Ok(doc_stats),
                        Err(e) => {
                            error!("[文档 {}] ❌ 处理过程中发生错误: {}", document_index, e);
                            Err(e)
                        }
                    }
                }));
            }

            // 等待本批所有任务完成
            let mut batch_success = 0;
            let mut batch_total = 0;

            for result in join_all(handles).await {
                batch_total += 1;
                match result {
                    Ok(Ok(doc_stats)) => {
                        stats.success += 1;
                        stats.questions += doc_stats.questions;
                        stats.answers += doc_stats.answers;
                        batch_success += 1;
                    }
                    Ok(Err(_)) => {
                        stats.failed += 1;
                    }
                    Err(e) => {
                        error!("任务执行失败: {}", e);
                        stats.failed += 1;
                    }
                }
            }

            logging::log_batch_complete(batch_num, batch_success, batch_total);
        }

        Ok(stats)
    }
}

// ========== 日志辅助函数 ==========

/// 初始化输出日志文件
fn init_log_file(config: &Config) -> Result<()> {
    let log_header = format!(
        "{}\n试题导入日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(&config.output_log_file, log_header)?;
    Ok(())
}
