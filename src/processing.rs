//! 核心批处理模块
//!
//! 负责题目的批量解析生成流程：加载 → 过滤 → 逐题生成 → 逐题保存

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{load_questions, save_questions, Language, Question};
use crate::services::ExplanationGenerator;

/// 两种语言之间的间隔，用于规避速率限制
const LANGUAGE_DELAY: Duration = Duration::from_millis(500);
/// 两道题之间的间隔
const QUESTION_DELAY: Duration = Duration::from_secs(1);

/// 处理统计
#[derive(Debug, Default)]
pub struct ProcessStats {
    /// 本次实际生成了解析的题目数
    pub processed: usize,
    /// 已有解析而跳过的题目数
    pub skipped: usize,
}

/// 批量处理全部题目
///
/// # 流程
/// 1. 加载完整题库
/// 2. 如配置了 `start_id`，工作集限定为 `id >= start_id` 的题目；
///    保存时始终写回完整题库
/// 3. 对工作集中每道题（按文件顺序）：
///    - 两个解析字段都已存在（包括空串）则整题跳过，不调用、不保存
///    - 否则依次生成英文、中文解析；失败写入空串标记
///    - 每道题处理完立即把完整题库写回输出文件
/// 4. 返回统计
pub async fn process_questions<G: ExplanationGenerator>(
    generator: &G,
    config: &Config,
) -> Result<ProcessStats> {
    info!("正在加载题目...");
    let mut all_questions = load_questions(Path::new(&config.input_file)).await?;

    let total = all_questions.len();
    info!("题目总数: {}", total);

    // 工作集用下标表示，保存目标始终是完整题库
    let working_set: Vec<usize> = match config.start_id {
        Some(start_id) => {
            let indices: Vec<usize> = all_questions
                .iter()
                .enumerate()
                .filter(|(_, q)| q.id >= start_id)
                .map(|(i, _)| i)
                .collect();
            info!(
                "已过滤: ID >= {} 的题目共 {} 道待处理",
                start_id,
                indices.len()
            );
            indices
        }
        None => (0..total).collect(),
    };

    let working_total = working_set.len();
    let mut stats = ProcessStats::default();

    for (pos, &idx) in working_set.iter().enumerate() {
        let count = pos + 1;
        let question_id = all_questions[idx].id;

        // 两个字段都在（即使是空串的失败标记）就整题跳过
        if all_questions[idx].has_both_explanations() {
            info!(
                "[{}/{}] 题目 {}: 已有 AI 解析，跳过",
                count, working_total, question_id
            );
            stats.skipped += 1;
            continue;
        }

        info!("[{}/{}] 正在处理题目 {}...", count, working_total, question_id);

        generate_one(generator, &mut all_questions[idx], Language::En).await;
        sleep(LANGUAGE_DELAY).await;
        generate_one(generator, &mut all_questions[idx], Language::Ch).await;

        save_questions(Path::new(&config.output_file), &all_questions).await?;
        info!("  [OK] 进度已保存");
        stats.processed += 1;

        sleep(QUESTION_DELAY).await;
    }

    info!("全部题目处理完成！");

    Ok(stats)
}

/// 为一道题生成单个语言的解析并写入对应字段
///
/// 失败时写入空串标记，流程继续。
async fn generate_one<G: ExplanationGenerator>(
    generator: &G,
    question: &mut Question,
    language: Language,
) {
    info!("  正在生成{}解析...", language.name());

    let result = generator.generate(question, language).await;
    let (value, ok) = match result {
        Some(text) => (text, true),
        None => (String::new(), false),
    };

    if ok {
        info!("  [OK] {}解析生成成功", language.name());
    } else {
        error!("  [FAIL] {}解析生成失败", language.name());
    }

    match language {
        Language::En => question.explanation_ai_en = Some(value),
        Language::Ch => question.explanation_ai_ch = Some(value),
    }
}
