pub mod llm_service;
pub mod prompt;

pub use llm_service::LlmService;

use crate::models::{Language, Question};

/// 解析生成能力的抽象接口
///
/// 失败在这一层被完全吸收：任何外部调用错误都记录日志并返回 `None`，
/// 不会向批处理层抛出。
#[allow(async_fn_in_trait)]
pub trait ExplanationGenerator {
    /// 为一道题生成指定语言的解析；失败返回 `None`
    async fn generate(&self, question: &Question, language: Language) -> Option<String>;
}
