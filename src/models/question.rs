use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 单个题目
///
/// 两个 AI 解析字段用 `Option` 区分"字段不存在"和"字段为空串"：
/// 不存在表示尚未处理，空串表示处理过但生成失败。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,

    /// 领域分类标签（如 "KYC", "Sanctions"）
    #[serde(default)]
    pub domain: String,

    pub question: String,

    /// 选项：标签 -> 内容，保持文件中的插入顺序
    #[serde(default)]
    pub options: IndexMap<String, String>,

    /// 正确答案的标签列表
    #[serde(default)]
    pub correct_answers: Vec<String>,

    /// 人工撰写的原始解析（可为空）
    #[serde(default)]
    pub explanation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_ai_en: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_ai_ch: Option<String>,

    /// 题库文件中本工具不关心的其他字段，原样保留
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Question {
    /// 两个 AI 解析字段是否都已存在（包括空串的失败标记）
    pub fn has_both_explanations(&self) -> bool {
        self.explanation_ai_en.is_some() && self.explanation_ai_ch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 42,
            "domain": "KYC",
            "question": "以下哪项属于客户尽职调查？",
            "options": {"A": "身份核实", "B": "随机抽查"},
            "correct_answers": ["A"],
            "explanation": "原始解析",
            "source": "mock-exam-1"
        }"#
    }

    #[test]
    fn test_deserialize_without_ai_fields() {
        let q: Question = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(q.id, 42);
        assert_eq!(q.options.get("A").unwrap(), "身份核实");
        assert!(q.explanation_ai_en.is_none());
        assert!(q.explanation_ai_ch.is_none());
        assert!(!q.has_both_explanations());
        // 未知字段被保留
        assert_eq!(q.extra.get("source").unwrap(), "mock-exam-1");
    }

    #[test]
    fn test_empty_string_counts_as_present() {
        let mut q: Question = serde_json::from_str(sample_json()).unwrap();
        q.explanation_ai_en = Some(String::new());
        assert!(!q.has_both_explanations());

        q.explanation_ai_ch = Some(String::new());
        assert!(q.has_both_explanations());
    }

    #[test]
    fn test_serialize_skips_absent_ai_fields() {
        let q: Question = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&q).unwrap();

        assert!(!json.contains("explanation_ai_en"));
        assert!(!json.contains("explanation_ai_ch"));
    }

    #[test]
    fn test_serialize_keeps_empty_ai_fields() {
        let mut q: Question = serde_json::from_str(sample_json()).unwrap();
        q.explanation_ai_en = Some(String::new());
        let json = serde_json::to_string(&q).unwrap();

        assert!(json.contains(r#""explanation_ai_en":"""#));
    }

    #[test]
    fn test_options_preserve_insertion_order() {
        let json = r#"{"id": 1, "question": "q", "options": {"C": "c", "A": "a", "B": "b"}}"#;
        let q: Question = serde_json::from_str(json).unwrap();

        let labels: Vec<&String> = q.options.keys().collect();
        assert_eq!(labels, ["C", "A", "B"]);
    }
}
