//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义对外部合成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的旁白文本
    pub text: String,
    /// 音色短名（如 en-US-AndrewNeural）
    pub voice: String,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 压缩音频数据（通常为 MP3）
    pub audio_data: Vec<u8>,
    /// 服务端输出格式标识
    pub audio_format: String,
}

/// TTS Engine Port
///
/// 外部语音合成服务的抽象接口，单次请求单次响应
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行一次语音合成
    ///
    /// 发送文本和音色到外部服务，返回完整的合成音频
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError>;
}
