use anyhow::Result;
use clap::Parser;
use tracing::info;

use add_explanations::config::Config;
use add_explanations::services::LlmService;
use add_explanations::{logger, processing};

#[derive(Parser)]
#[command(
    name = "add_explanations",
    version,
    about = "为题库题目批量生成中英文 AI 解析"
)]
struct Cli {
    /// 输入 JSON 文件
    #[arg(short, long, default_value = "questions.json")]
    input: String,

    /// 输出 JSON 文件
    #[arg(short, long, default_value = "questions.json")]
    output: String,

    /// 起始题目 ID（含），只处理 ID >= start_id 的题目
    #[arg(long)]
    start_id: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    let cli = Cli::parse();

    // 加载配置（缺少 API 凭证时立即失败）
    let config = Config::from_env()?.with_cli_args(cli.input, cli.output, cli.start_id);

    if let Some(start_id) = config.start_id {
        info!("从题目 ID {} 开始处理（含）", start_id);
    }

    let service = LlmService::new(&config);
    let stats = processing::process_questions(&service, &config).await?;

    info!("本次生成: {} 道，跳过: {} 道", stats.processed, stats.skipped);

    Ok(())
}
