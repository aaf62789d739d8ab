//! Voiceover Context - Value Objects

use serde::{Deserialize, Serialize};

use super::VoiceoverError;

/// 旁白脚本
///
/// 不变量:
/// - 文本去除首尾空白后非空
/// - 标点符号作为停顿提示原样传给合成服务，本系统不解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(String);

impl Script {
    pub fn new(text: impl Into<String>) -> Result<Self, VoiceoverError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(VoiceoverError::EmptyScript);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 脚本长度（字符数，用于日志）
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色选择器 - 服务端识别的音色短名
///
/// 形如 `en-US-AndrewNeural`。本系统只做形状校验，
/// 名称是否真实存在由音色目录或合成服务判定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSelector(String);

impl VoiceSelector {
    pub fn new(name: impl Into<String>) -> Result<Self, VoiceoverError> {
        let name = name.into();
        if name.is_empty() {
            return Err(VoiceoverError::InvalidVoiceName(
                "音色名称不能为空".to_string(),
            ));
        }
        if name.chars().any(|c| c.is_whitespace()) {
            return Err(VoiceoverError::InvalidVoiceName(format!(
                "音色名称不能包含空白字符: {:?}",
                name
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_rejects_empty_text() {
        assert!(Script::new("").is_err());
        assert!(Script::new("   \n\t ").is_err());
    }

    #[test]
    fn test_script_keeps_punctuation_verbatim() {
        let script = Script::new("Hello, world. ... Pause here.").unwrap();
        assert_eq!(script.as_str(), "Hello, world. ... Pause here.");
    }

    #[test]
    fn test_voice_selector_accepts_short_name() {
        let voice = VoiceSelector::new("en-US-AndrewNeural").unwrap();
        assert_eq!(voice.as_str(), "en-US-AndrewNeural");
    }

    #[test]
    fn test_voice_selector_rejects_empty_and_whitespace() {
        assert!(VoiceSelector::new("").is_err());
        assert!(VoiceSelector::new("en US Andrew").is_err());
    }
}
