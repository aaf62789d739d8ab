//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 脚本来源配置
    #[serde(default)]
    pub script: ScriptConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 音色短名
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 输出音频格式标识
    #[serde(default = "default_audio_format")]
    pub audio_format: String,

    /// 单次合成超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 合成前是否用音色列表预检音色短名
    #[serde(default = "default_verify_voice")]
    pub verify_voice: bool,
}

fn default_voice() -> String {
    "en-US-AndrewNeural".to_string()
}

fn default_audio_format() -> String {
    "audio-24khz-48kbitrate-mono-mp3".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_verify_voice() -> bool {
    true
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            audio_format: default_audio_format(),
            timeout_secs: default_tts_timeout(),
            verify_voice: default_verify_voice(),
        }
    }
}

/// 脚本来源配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptConfig {
    /// 旁白文本文件路径（UTF-8）
    /// 未设置时使用内置宣传片脚本
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 音频产物路径
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("public/voiceover.mp3")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
