//! 应用层错误定义
//!
//! 统一的命令错误类型，对应三类失败:
//! 合成服务不可用、音色无效、落盘失败

use thiserror::Error;

use crate::application::ports::{AudioStorageError, CatalogError, TtsError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入校验失败
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 合成服务不可达或返回异常
    #[error("TTS provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// 服务端不认识该音色
    #[error("Voice not recognized by provider: {0}")]
    InvalidVoice(String),

    /// 目标路径写入失败
    #[error("IO failure: {0}")]
    IoFailure(String),
}

impl ApplicationError {
    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建服务不可用错误
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::VoiceNotFound(voice) => Self::InvalidVoice(voice),
            other => Self::ProviderUnavailable(other.to_string()),
        }
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(err: CatalogError) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        Self::IoFailure(err.to_string())
    }
}
