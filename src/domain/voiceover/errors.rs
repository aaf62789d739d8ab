//! Voiceover Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceoverError {
    #[error("脚本不能为空")]
    EmptyScript,

    #[error("无效的音色名称: {0}")]
    InvalidVoiceName(String),
}
