//! 进度查看工具
//!
//! 只读统计 questions.json 的处理进度，不修改文件、不调用外部服务

use std::path::Path;

use anyhow::Result;

use add_explanations::models::load_questions;
use add_explanations::progress::ProgressSummary;

#[tokio::main]
async fn main() -> Result<()> {
    let questions = load_questions(Path::new("questions.json")).await?;

    let summary = ProgressSummary::from_questions(&questions);
    println!("{}", summary);

    Ok(())
}
