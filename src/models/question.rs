use serde::{Deserialize, Serialize};

/// 单个答案记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// 答案文本（已去除 `__` 下划线标记并修剪首尾空白）
    pub text: String,
    /// 是否为正确答案（原始文本中含有 `__` 标记）
    pub is_correct: bool,
}

/// 单个题目记录
///
/// 一旦产出即不可变：提取器不会修改已产出的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题干全文（题目起始行与后续补充行拼接而成）
    pub prompt: String,
    /// 答案列表，按原文出现顺序排列
    pub answers: Vec<AnswerRecord>,
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let prompt_preview = if self.prompt.chars().count() > 80 {
            self.prompt.chars().take(80).collect::<String>() + "..."
        } else {
            self.prompt.clone()
        };

        write!(f, "{} [答案: {} 个]", prompt_preview, self.answers.len())
    }
}

/// 单页已提取文本
#[derive(Debug, Clone)]
pub struct PageText {
    /// 页码（从1开始）
    pub page_number: usize,
    /// 该页的原始文本
    pub text: String,
}

impl PageText {
    /// 该页是否没有可读文本（扫描件等情况）
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// 单个文档的全部页文本
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// 文档名称（来自文件名）
    pub name: String,
    /// 源文件路径
    pub file_path: Option<String>,
    /// 页列表
    pub pages: Vec<PageText>,
}

/// 持久化单元：一页的提取结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// 文档名称
    pub document: String,
    /// 页码（从1开始）
    pub page_number: usize,
    /// 导入时间
    pub imported_at: String,
    /// 该页提取出的全部题目
    pub questions: Vec<QuestionRecord>,
}
