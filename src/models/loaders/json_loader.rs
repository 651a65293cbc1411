use std::path::Path;

use tokio::fs;

use crate::error::FileError;
use crate::models::question::Question;

/// 从 JSON 文件加载全部题目
pub async fn load_questions(path: &Path) -> Result<Vec<Question>, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let questions: Vec<Question> =
        serde_json::from_str(&content).map_err(|source| FileError::JsonParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(questions)
}

/// 把全部题目写回 JSON 文件
///
/// 整文件覆盖写入（2 空格缩进，UTF-8 原样输出），非原子替换。
pub async fn save_questions(path: &Path, questions: &[Question]) -> Result<(), FileError> {
    let content = serde_json::to_string_pretty(questions)
        .map_err(|source| FileError::JsonSerializeFailed { source })?;

    fs::write(path, content)
        .await
        .map_err(|source| FileError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
