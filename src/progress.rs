//! 处理进度统计
//!
//! 只读统计，不修改题库、不发起任何外部调用

use std::fmt;

use crate::models::Question;

/// 进度汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    /// 题目总数
    pub total: usize,
    /// 中英文解析都已存在的题目数
    pub fully_processed: usize,
    /// 已有英文解析的题目数
    pub has_en: usize,
    /// 已有中文解析的题目数
    pub has_ch: usize,
}

impl ProgressSummary {
    /// 统计一批题目的处理进度
    ///
    /// "存在"按字段是否出现判定，空串的失败标记也算已处理。
    pub fn from_questions(questions: &[Question]) -> Self {
        Self {
            total: questions.len(),
            fully_processed: questions.iter().filter(|q| q.has_both_explanations()).count(),
            has_en: questions
                .iter()
                .filter(|q| q.explanation_ai_en.is_some())
                .count(),
            has_ch: questions
                .iter()
                .filter(|q| q.explanation_ai_ch.is_some())
                .count(),
        }
    }

    /// 完成百分比；空题库返回 0.0
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.fully_processed as f64 * 100.0 / self.total as f64
        }
    }

    /// 剩余未完成的题目数
    pub fn remaining(&self) -> usize {
        self.total - self.fully_processed
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total questions: {}", self.total)?;
        writeln!(
            f,
            "Fully processed (both EN and CH): {}/{} ({:.1}%)",
            self.fully_processed,
            self.total,
            self.percent()
        )?;
        writeln!(f, "Has English explanation: {}/{}", self.has_en, self.total)?;
        writeln!(f, "Has Chinese explanation: {}/{}", self.has_ch, self.total)?;
        write!(f, "Remaining: {}", self.remaining())
    }
}
