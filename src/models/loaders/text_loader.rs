use crate::models::question::{DocumentText, PageText};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 页分隔符：PDF 文本提取工具在每页末尾输出的换页符
const PAGE_SEPARATOR: char = '\u{0c}';

/// 从 txt 文件加载数据并转换为 DocumentText 对象
///
/// 文件内容按换页符切分为页，页码从1开始；
/// 没有换页符的文件视为单页文档
pub async fn load_text_to_document(text_file_path: &Path) -> Result<DocumentText> {
    let content = fs::read_to_string(text_file_path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", text_file_path.display()))?;

    let name = text_file_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    // 末尾的换页符不产生空页
    let body = content
        .strip_suffix(PAGE_SEPARATOR)
        .unwrap_or(content.as_str());

    let pages = body
        .split(PAGE_SEPARATOR)
        .enumerate()
        .map(|(i, text)| PageText {
            page_number: i + 1,
            text: text.to_string(),
        })
        .collect();

    Ok(DocumentText {
        name,
        file_path: Some(text_file_path.to_string_lossy().to_string()),
        pages,
    })
}

/// 从文件夹中加载所有 txt 文件并转换为 DocumentText 对象列表
pub async fn load_all_text_files(folder_path: &str) -> Result<Vec<DocumentText>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut text_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            text_files.push(path);
        }
    }

    // 按文件名排序，保证稳定的处理顺序
    text_files.sort();

    let mut documents = Vec::new();

    for path in &text_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_text_to_document(path).await {
            Ok(document) => {
                tracing::info!("成功加载 {} 页", document.pages.len());
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}
