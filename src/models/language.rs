use std::fmt;
use std::str::FromStr;

/// 解析语言
///
/// 封闭的双值枚举：只接受 "en" 和 "ch"，其他值一律报错，
/// 不做任何静默回退。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// 英文
    En,
    /// 中文
    Ch,
}

impl Language {
    /// 获取语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ch => "ch",
        }
    }

    /// 获取用于日志显示的名称
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "英文",
            Language::Ch => "中文",
        }
    }

}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ch" => Ok(Language::Ch),
            other => Err(format!("无法识别的语言代码: {other}（只支持 en / ch）")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
