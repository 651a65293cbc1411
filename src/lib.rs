//! # Add Explanations
//!
//! 为 AML/合规题库批量生成中英文 AI 解析的命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用简单的三层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目数据结构与 JSON 加载/保存
//! - `Question` - 单个题目（含两个 AI 解析字段）
//! - `Language` - 解析语言（封闭的双值枚举）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Question
//! - `LlmService` - LLM 解析生成能力
//! - `ExplanationGenerator` - 生成能力的抽象接口（便于测试）
//!
//! ### ③ 编排层（Processing）
//! - `processing` - 批量遍历题目，逐题生成并保存进度
//! - `progress` - 只读统计，供 `check_progress` 使用
//!
//! ## 两个可执行文件
//! - `add_explanations` - 批量生成 AI 解析
//! - `check_progress` - 查看处理进度

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod processing;
pub mod progress;
pub mod services;

// 重新导出常用类型
pub use config::Config;
pub use error::{ConfigError, FileError};
pub use models::{load_questions, save_questions, Language, Question};
pub use processing::{process_questions, ProcessStats};
pub use progress::ProgressSummary;
pub use services::{ExplanationGenerator, LlmService};
