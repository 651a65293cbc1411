//! 解析生成的提示词构建
//!
//! 提示词是确定性的：同一道题、同一语言，构建出的文本完全一致。

use crate::models::{Language, Question};

/// 固定的系统消息
pub const SYSTEM_MESSAGE: &str = "You are a helpful assistant that provides clear, \
     accurate explanations for AML and compliance questions.";

/// 构建一道题的解析生成提示词
pub fn build_explanation_prompt(question: &Question, language: Language) -> String {
    // 选项按插入顺序逐行渲染
    let options_text = question
        .options
        .iter()
        .map(|(label, text)| format!("{}: {}", label, text))
        .collect::<Vec<_>>()
        .join("\n");

    let correct_answers_text = question.correct_answers.join(", ");

    match language {
        Language::En => format!(
            r#"You are an expert in Anti-Money Laundering (AML) and compliance.

Given the following question and context, provide a clear, concise explanation in English that helps understand why the correct answer(s) is/are correct.

Domain: {domain}

Question: {question}

Options:
{options_text}

Correct Answer(s): {correct_answers_text}

Existing Explanation (for reference):
{existing_explanation}

Please provide a clear, well-structured explanation in English that:
1. Explains why the correct answer(s) is/are correct
2. Explains why the incorrect options are wrong (if applicable)
3. Is concise but comprehensive
4. Uses professional terminology appropriate for AML/compliance professionals

Explanation:"#,
            domain = question.domain,
            question = question.question,
            options_text = options_text,
            correct_answers_text = correct_answers_text,
            existing_explanation = question.explanation,
        ),
        Language::Ch => format!(
            r#"你是一位反洗钱（AML）和合规领域的专家。

根据以下问题和上下文，用中文提供清晰、简洁的解释，帮助理解为什么正确答案是正确的。

领域：{domain}

问题：{question}

选项：
{options_text}

正确答案：{correct_answers_text}

现有解释（供参考）：
{existing_explanation}

请用中文提供清晰、结构良好的解释，要求：
1. 解释为什么正确答案是正确的
2. 解释为什么错误选项是错误的（如适用）
3. 简洁但全面
4. 使用适合AML/合规专业人士的专业术语

解释："#,
            domain = question.domain,
            question = question.question,
            options_text = options_text,
            correct_answers_text = correct_answers_text,
            existing_explanation = question.explanation,
        ),
    }
}
