use crate::error::ConfigError;

/// API 凭证的环境变量名
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入题库文件
    pub input_file: String,
    /// 输出题库文件
    pub output_file: String,
    /// 起始题目 ID（含），None 表示不过滤
    pub start_id: Option<u64>,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "questions.json".to_string(),
            output_file: "questions.json".to_string(),
            start_id: None,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
        }
    }
}

impl Config {
    /// 从环境读取配置
    ///
    /// 先加载 `.env.local`（不存在则忽略），再读取环境变量。
    /// API 凭证没有默认值，缺失时启动失败。
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename(".env.local").ok();

        let default = Self::default();
        let llm_api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::ApiKeyNotFound {
                var_name: API_KEY_VAR.to_string(),
            })?;

        Ok(Self {
            input_file: std::env::var("INPUT_FILE").unwrap_or(default.input_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            start_id: None,
            llm_api_key,
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        })
    }

    /// 用命令行参数覆盖文件路径和过滤条件
    pub fn with_cli_args(
        mut self,
        input: String,
        output: String,
        start_id: Option<u64>,
    ) -> Self {
        self.input_file = input;
        self.output_file = output;
        self.start_id = start_id;
        self
    }
}
