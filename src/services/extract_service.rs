//! 题目提取服务 - 业务能力层
//!
//! 将单页已提取文本解析为结构化的题目/答案记录。
//! 单次正向扫描的行状态机：同一输入必定得到同一输出，
//! 不产生任何副作用，对格式残缺的文本也不会报错。

use crate::config::Config;
use crate::models::question::{AnswerRecord, QuestionRecord};
use regex::Regex;
use std::sync::OnceLock;

/// 题目起始行模式：Q + 数字 + 空白 + 题干
static QUESTION_HEADER: OnceLock<Regex> = OnceLock::new();

fn question_header() -> &'static Regex {
    QUESTION_HEADER.get_or_init(|| Regex::new(r"^Q\d+\s+(.*)$").expect("固定模式必定有效"))
}

/// 判断一行（已修剪首尾空白）是否为答案起始标记
///
/// 标记行是单独的 `o`，或以 `o` 开头且紧跟空白；
/// 以 `o` 开头的普通单词（如 oxide）不是标记
fn is_answer_marker(line: &str) -> bool {
    line == "o"
        || line
            .strip_prefix('o')
            .map_or(false, |rest| rest.starts_with(char::is_whitespace))
}

/// 题目提取器
#[derive(Debug, Clone)]
pub struct Extractor {
    /// 是否保留没有任何答案的题目
    ///
    /// 历史行为是静默丢弃这类题目，默认保持兼容
    keep_unanswered: bool,
}

impl Extractor {
    /// 创建新的题目提取器（历史兼容行为）
    pub fn new() -> Self {
        Self {
            keep_unanswered: false,
        }
    }

    /// 根据配置创建题目提取器
    pub fn from_config(config: &Config) -> Self {
        Self {
            keep_unanswered: config.keep_unanswered,
        }
    }

    /// 保留没有答案的题目
    pub fn keep_unanswered(mut self, keep: bool) -> Self {
        self.keep_unanswered = keep;
        self
    }

    /// 从单页文本中提取全部题目记录
    ///
    /// # 参数
    /// - `text`: 一页已提取的原始文本，行以 `\n` 分隔
    ///
    /// # 返回
    /// 按出现顺序排列的题目记录；空输入返回空列表
    pub fn extract(&self, text: &str) -> Vec<QuestionRecord> {
        let lines: Vec<&str> = text.split('\n').collect();

        let mut questions = Vec::new();
        let mut current_prompt: Option<String> = None;
        let mut current_answers: Vec<AnswerRecord> = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();

            if let Some(caps) = question_header().captures(line) {
                // 新题目开始：先结算上一道题
                self.flush(&mut questions, &mut current_prompt, &mut current_answers);
                current_prompt = Some(caps[1].trim().to_string());
                i += 1;
            } else if is_answer_marker(line) {
                let (raw_answer, next) = collect_full_answer(&lines, i);

                // 没有待处理题目时整个答案块被丢弃
                if current_prompt.is_some() {
                    current_answers.push(answer_from_raw(&raw_answer));
                }
                i = next;
            } else {
                // 补充行：拼接到当前题干；没有题干时该行不携带信息
                if let Some(prompt) = current_prompt.as_mut() {
                    prompt.push(' ');
                    prompt.push_str(line);
                }
                i += 1;
            }
        }

        // 结算最后一道题
        self.flush(&mut questions, &mut current_prompt, &mut current_answers);

        questions
    }

    /// 结算当前待处理题目
    ///
    /// 只有题干非空且至少有一个答案（或开启保留开关）时才产出记录
    fn flush(
        &self,
        questions: &mut Vec<QuestionRecord>,
        current_prompt: &mut Option<String>,
        current_answers: &mut Vec<AnswerRecord>,
    ) {
        if let Some(prompt) = current_prompt.take() {
            let prompt = prompt.trim().to_string();
            if !prompt.is_empty() && (!current_answers.is_empty() || self.keep_unanswered) {
                questions.push(QuestionRecord {
                    prompt,
                    answers: std::mem::take(current_answers),
                });
            } else {
                current_answers.clear();
            }
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用默认配置提取单页文本中的题目记录
pub fn extract_questions_and_answers(text: &str) -> Vec<QuestionRecord> {
    Extractor::new().extract(text)
}

/// 从答案起始行开始收集完整的原始答案文本
///
/// 标记行去掉行首 `o` 后剩余的内容是答案首段，
/// 其后的行依次以空格拼接，直到遇到新的题目行或答案标记行为止；
/// 终止行留给外层循环正常处理
///
/// # 返回
/// (拼接后的原始答案文本, 下一个待处理行的下标)
fn collect_full_answer(lines: &[&str], start: usize) -> (String, usize) {
    let first = lines[start].trim();
    let mut answer = first.strip_prefix('o').unwrap_or(first).trim_start().to_string();

    let mut i = start + 1;
    while i < lines.len() {
        let line = lines[i].trim();
        if question_header().is_match(line) || is_answer_marker(line) {
            break;
        }
        answer.push(' ');
        answer.push_str(line);
        i += 1;
    }

    (answer, i)
}

/// 根据拼接后的原始文本构造答案记录
///
/// `__` 双下划线标记正确答案，去除标记后修剪首尾空白
fn answer_from_raw(raw: &str) -> AnswerRecord {
    let is_correct = raw.contains("__");
    let text = raw.replace("__", "").trim().to_string();

    AnswerRecord { text, is_correct }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_input() {
        let text = "Q1 What is the penalty for a false start?\no\n__Five yards__\no\nTen yards\nQ2 How long is a quarter?\no\n__Fifteen minutes__";
        let questions = extract_questions_and_answers(text);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "What is the penalty for a false start?");
        assert_eq!(questions[0].answers.len(), 2);
        assert_eq!(questions[0].answers[0].text, "Five yards");
        assert!(questions[0].answers[0].is_correct);
        assert_eq!(questions[0].answers[1].text, "Ten yards");
        assert!(!questions[0].answers[1].is_correct);
        assert_eq!(questions[1].prompt, "How long is a quarter?");
        assert_eq!(questions[1].answers.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_questions_and_answers("").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let text = "Q1 Prompt\no\n__A__\no\nB";
        let first = extract_questions_and_answers(text);
        let second = extract_questions_and_answers(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_underline_marker_round_trip() {
        let questions = extract_questions_and_answers("Q1 P\no\n__Correct__\no\nPlain");

        assert_eq!(questions[0].answers[0].text, "Correct");
        assert!(questions[0].answers[0].is_correct);
        assert_eq!(questions[0].answers[1].text, "Plain");
        assert!(!questions[0].answers[1].is_correct);
    }

    #[test]
    fn test_orphan_header_dropped() {
        let questions = extract_questions_and_answers("Q1 Prompt\nQ2 Prompt2\no\nAns");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Prompt2");
        assert_eq!(questions[0].answers.len(), 1);
        assert_eq!(questions[0].answers[0].text, "Ans");
    }

    #[test]
    fn test_trailing_question_without_answer_dropped() {
        let questions = extract_questions_and_answers("Q1 P\no\nA\nQ2 Lost");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "P");
    }

    #[test]
    fn test_multi_line_answer_assembly() {
        let questions = extract_questions_and_answers("Q1 P\no\nLine one\nLine two\nQ2 X\no\nY");

        assert_eq!(questions[0].answers.len(), 1);
        assert_eq!(questions[0].answers[0].text, "Line one Line two");
    }

    #[test]
    fn test_multi_line_prompt_assembly() {
        let questions = extract_questions_and_answers("Q1 Part one\nPart two\no\nAns");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Part one Part two");
    }

    #[test]
    fn test_inline_answer_on_marker_line() {
        let questions = extract_questions_and_answers("Q1 P\no __Right__ answer\no Wrong answer");

        assert_eq!(questions[0].answers.len(), 2);
        assert_eq!(questions[0].answers[0].text, "Right answer");
        assert!(questions[0].answers[0].is_correct);
        assert_eq!(questions[0].answers[1].text, "Wrong answer");
        assert!(!questions[0].answers[1].is_correct);
    }

    #[test]
    fn test_word_starting_with_o_is_not_marker() {
        let questions = extract_questions_and_answers("Q1 Rust is named after a fungus\noxide is unrelated\no\nYes");

        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0].prompt,
            "Rust is named after a fungus oxide is unrelated"
        );
        assert_eq!(questions[0].answers.len(), 1);
    }

    #[test]
    fn test_orphan_answer_before_any_header_dropped() {
        let questions = extract_questions_and_answers("o\nStray answer\nQ1 P\no\nReal");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answers.len(), 1);
        assert_eq!(questions[0].answers[0].text, "Real");
    }

    #[test]
    fn test_keep_unanswered_flag() {
        let extractor = Extractor::new().keep_unanswered(true);
        let questions = extractor.extract("Q1 No answers here\nQ2 Q\no\nA");

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "No answers here");
        assert!(questions[0].answers.is_empty());
        assert_eq!(questions[1].answers.len(), 1);
    }

    #[test]
    fn test_answer_order_preserved() {
        let questions = extract_questions_and_answers("Q1 P\no\nC\no\nA\no\nC");

        let texts: Vec<&str> = questions[0]
            .answers
            .iter()
            .map(|a| a.text.as_str())
            .collect();
        // 不排序也不去重
        assert_eq!(texts, vec!["C", "A", "C"]);
    }
}
