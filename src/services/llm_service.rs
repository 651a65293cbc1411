//! LLM 服务 - 业务能力层
//!
//! 只负责"生成一道题的解析"能力，不关心批处理流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{Language, Question};
use crate::services::prompt::{build_explanation_prompt, SYSTEM_MESSAGE};
use crate::services::ExplanationGenerator;

/// 固定采样温度
const TEMPERATURE: f32 = 0.7;
/// 单次生成的最大 token 数
const MAX_TOKENS: u32 = 1000;

/// LLM 服务
///
/// 职责：
/// - 调用 LLM API 生成单道题的解析
/// - 提供通用的 LLM 调用接口
/// - 只处理单个题目
/// - 不出现 Vec<Question>
/// - 不关心跳过/保存/延时等流程
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 通用的 LLM 调用函数
    ///
    /// 这是最基础的 LLM 调用接口，解析生成基于此函数实现。
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 响应内容（已去除首尾空白）
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build()?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            anyhow::anyhow!("LLM API 调用失败: {}", e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow::anyhow!("LLM 返回内容为空"))?;

        Ok(content.trim().to_string())
    }
}

impl ExplanationGenerator for LlmService {
    /// 为一道题生成指定语言的解析
    ///
    /// 任何外部调用失败（网络、鉴权、配额、响应为空）都在这里被吸收：
    /// 记录 warn 日志并返回 `None`，批处理层据此写入空串标记。
    async fn generate(&self, question: &Question, language: Language) -> Option<String> {
        let user_message = build_explanation_prompt(question, language);

        match self.send_to_llm(&user_message, Some(SYSTEM_MESSAGE)).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    "生成{}解析失败 (题目 {}): {}",
                    language.name(),
                    question.id,
                    e
                );
                None
            }
        }
    }
}
