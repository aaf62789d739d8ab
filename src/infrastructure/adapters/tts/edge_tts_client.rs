//! Edge TTS Client - 调用 Edge 朗读合成服务
//!
//! 实现 TtsEnginePort trait，通过 msedge-tts 协议客户端完成合成。
//! 客户端是同步实现，放在 spawn_blocking 中执行；每次合成建立一条连接

use async_trait::async_trait;
use msedge_tts::tts::{client::connect, SpeechConfig};

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

/// Edge TTS 客户端配置
#[derive(Debug, Clone)]
pub struct EdgeTtsClientConfig {
    /// 输出音频格式标识
    pub audio_format: String,
    /// 音调偏移
    pub pitch: i32,
    /// 语速偏移
    pub rate: i32,
    /// 音量偏移
    pub volume: i32,
}

impl Default for EdgeTtsClientConfig {
    fn default() -> Self {
        Self {
            audio_format: "audio-24khz-48kbitrate-mono-mp3".to_string(),
            pitch: 0,
            rate: 0,
            volume: 0,
        }
    }
}

impl EdgeTtsClientConfig {
    pub fn with_audio_format(mut self, format: impl Into<String>) -> Self {
        self.audio_format = format.into();
        self
    }
}

/// Edge TTS 客户端
pub struct EdgeTtsClient {
    config: EdgeTtsClientConfig,
}

impl EdgeTtsClient {
    /// 创建新的 Edge TTS 客户端
    pub fn new(config: EdgeTtsClientConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Self {
        Self::new(EdgeTtsClientConfig::default())
    }
}

#[async_trait]
impl TtsEnginePort for EdgeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let speech_config = SpeechConfig {
            voice_name: request.voice.clone(),
            audio_format: self.config.audio_format.clone(),
            pitch: self.config.pitch,
            rate: self.config.rate,
            volume: self.config.volume,
        };

        tracing::debug!(
            voice = %request.voice,
            text_len = request.text.len(),
            audio_format = %self.config.audio_format,
            "Sending synthesis request to Edge read-aloud service"
        );

        let text = request.text.clone();
        let audio_data = tokio::task::spawn_blocking(move || {
            let mut client = connect().map_err(|e| e.to_string())?;
            let audio = client
                .synthesize(&text, &speech_config)
                .map_err(|e| e.to_string())?;
            Ok::<Vec<u8>, String>(audio.audio_bytes)
        })
        .await
        .map_err(|e| TtsError::ServiceError(format!("synthesis task failed: {}", e)))?
        .map_err(TtsError::NetworkError)?;

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse(
                "service returned no audio data".to_string(),
            ));
        }

        tracing::info!(
            voice = %request.voice,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesisResponse {
            audio_data,
            audio_format: self.config.audio_format.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = EdgeTtsClientConfig::default();
        assert_eq!(config.audio_format, "audio-24khz-48kbitrate-mono-mp3");
        assert_eq!(config.pitch, 0);
        assert_eq!(config.rate, 0);
    }

    #[test]
    fn test_config_builder() {
        let config =
            EdgeTtsClientConfig::default().with_audio_format("audio-24khz-96kbitrate-mono-mp3");
        assert_eq!(config.audio_format, "audio-24khz-96kbitrate-mono-mp3");
    }
}
