//! Fake TTS Client - 用于测试的合成客户端
//!
//! 始终返回固定的音频字节，不实际调用合成服务；
//! 可注入故障以模拟服务不可达或音色被拒绝

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

/// 固定返回的音频载荷: MPEG 同步字开头的伪 MP3 帧
const FAKE_MP3_PAYLOAD: &[u8] = &[
    0xFF, 0xF3, 0x18, 0xC4, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

/// 注入的故障类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeFault {
    /// 模拟服务不可达
    Unreachable,
    /// 模拟服务端拒绝音色
    RejectVoice,
}

/// Fake TTS Client
pub struct FakeTtsClient {
    audio_data: Vec<u8>,
    latency: Duration,
    fault: Option<FakeFault>,
}

impl FakeTtsClient {
    /// 创建返回固定伪 MP3 载荷的客户端
    pub fn new() -> Self {
        Self::with_payload(FAKE_MP3_PAYLOAD.to_vec())
    }

    /// 创建返回指定载荷的客户端
    pub fn with_payload(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data,
            latency: Duration::ZERO,
            fault: None,
        }
    }

    /// 创建始终失败的客户端
    pub fn failing(fault: FakeFault) -> Self {
        Self {
            audio_data: Vec::new(),
            latency: Duration::ZERO,
            fault: Some(fault),
        }
    }

    /// 设置模拟的合成延迟
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for FakeTtsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        tracing::debug!(
            voice = %request.voice,
            text_len = request.text.len(),
            fault = ?self.fault,
            "FakeTtsClient: handling synthesis request"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.fault {
            Some(FakeFault::Unreachable) => Err(TtsError::NetworkError(
                "connection refused (injected)".to_string(),
            )),
            Some(FakeFault::RejectVoice) => Err(TtsError::VoiceNotFound(request.voice)),
            None => Ok(SynthesisResponse {
                audio_data: self.audio_data.clone(),
                audio_format: "audio-24khz-48kbitrate-mono-mp3".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_fixed_payload() {
        let client = FakeTtsClient::new();
        let response = client
            .synthesize(SynthesisRequest {
                text: "Hello.".to_string(),
                voice: "en-US-AndrewNeural".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.audio_data, FAKE_MP3_PAYLOAD);
        assert_eq!(response.audio_data[0], 0xFF);
    }

    #[tokio::test]
    async fn test_injected_faults() {
        let client = FakeTtsClient::failing(FakeFault::Unreachable);
        let err = client
            .synthesize(SynthesisRequest {
                text: "Hello.".to_string(),
                voice: "en-US-AndrewNeural".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::NetworkError(_)));

        let client = FakeTtsClient::failing(FakeFault::RejectVoice);
        let err = client
            .synthesize(SynthesisRequest {
                text: "Hello.".to_string(),
                voice: "xx-XX-NoSuchNeural".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TtsError::VoiceNotFound(_)));
    }
}
