//! Voiceover Command Handlers

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::application::commands::GenerateVoiceover;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStoragePort, SynthesisRequest, TtsEnginePort, VoiceCatalogPort,
};

// ============================================================================
// GenerateVoiceover
// ============================================================================

/// 生成配音响应
#[derive(Debug, Clone)]
pub struct GenerateVoiceoverResponse {
    /// 最终音频文件路径
    pub destination: PathBuf,
    /// 音频字节数
    pub audio_bytes: u64,
    /// 服务端输出格式标识
    pub audio_format: String,
}

/// GenerateVoiceover Handler
///
/// 编排: 音色目录校验（可选）-> 单次合成 -> 原子落盘。
/// 不做重试，单次尝试失败即向上传播
pub struct GenerateVoiceoverHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    voice_catalog: Option<Arc<dyn VoiceCatalogPort>>,
    audio_storage: Arc<dyn AudioStoragePort>,
    /// 单次合成的超时时间
    synthesis_timeout: Duration,
}

impl GenerateVoiceoverHandler {
    pub fn new(
        tts_engine: Arc<dyn TtsEnginePort>,
        voice_catalog: Option<Arc<dyn VoiceCatalogPort>>,
        audio_storage: Arc<dyn AudioStoragePort>,
        synthesis_timeout: Duration,
    ) -> Self {
        Self {
            tts_engine,
            voice_catalog,
            audio_storage,
            synthesis_timeout,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateVoiceover,
    ) -> Result<GenerateVoiceoverResponse, ApplicationError> {
        let request_id = Uuid::new_v4();

        tracing::debug!(
            request_id = %request_id,
            voice = %command.voice,
            script_chars = command.script.char_count(),
            destination = %command.destination.display(),
            "Generating voiceover"
        );

        // 音色预检: 目录里查不到的短名直接判定为无效音色
        if let Some(catalog) = &self.voice_catalog {
            let found = catalog.find_voice(command.voice.as_str()).await?;
            if found.is_none() {
                return Err(ApplicationError::InvalidVoice(
                    command.voice.as_str().to_string(),
                ));
            }
        }

        let request = SynthesisRequest {
            text: command.script.as_str().to_string(),
            voice: command.voice.as_str().to_string(),
        };

        let response = tokio::time::timeout(self.synthesis_timeout, self.tts_engine.synthesize(request))
            .await
            .map_err(|_| {
                ApplicationError::provider_unavailable(format!(
                    "synthesis timed out after {}s",
                    self.synthesis_timeout.as_secs()
                ))
            })??;

        if response.audio_data.is_empty() {
            return Err(ApplicationError::provider_unavailable(
                "provider returned an empty audio payload",
            ));
        }

        let destination = self
            .audio_storage
            .save(&command.destination, &response.audio_data)
            .await?;

        tracing::info!(
            request_id = %request_id,
            voice = %command.voice,
            audio_bytes = response.audio_data.len(),
            destination = %destination.display(),
            "Voiceover generated"
        );

        Ok(GenerateVoiceoverResponse {
            destination,
            audio_bytes: response.audio_data.len() as u64,
            audio_format: response.audio_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::domain::{Script, VoiceSelector};
    use crate::infrastructure::adapters::{
        FakeFault, FakeTtsClient, FakeVoiceCatalog, FileAudioStorage,
    };

    fn command(destination: PathBuf) -> GenerateVoiceover {
        GenerateVoiceover {
            script: Script::new("Hello world.").unwrap(),
            voice: VoiceSelector::new("en-US-AndrewNeural").unwrap(),
            destination,
        }
    }

    fn handler_with(
        engine: FakeTtsClient,
        catalog: Option<FakeVoiceCatalog>,
    ) -> GenerateVoiceoverHandler {
        GenerateVoiceoverHandler::new(
            Arc::new(engine),
            catalog.map(|c| Arc::new(c) as Arc<dyn VoiceCatalogPort>),
            Arc::new(FileAudioStorage::new()),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_generate_writes_audio_file() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = handler_with(
            FakeTtsClient::new(),
            Some(FakeVoiceCatalog::with_voices(&["en-US-AndrewNeural"])),
        );
        let response = handler.handle(command(destination.clone())).await.unwrap();

        assert_eq!(response.destination, destination);
        assert!(response.audio_bytes > 0);

        let written = std::fs::read(&destination).unwrap();
        assert_eq!(written.len() as u64, response.audio_bytes);
        // MP3 起始字节: ID3 标签或 MPEG 同步字
        assert!(written.starts_with(b"ID3") || written[0] == 0xFF);
    }

    #[tokio::test]
    async fn test_generate_creates_missing_parent_dirs() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("public").join("voiceover.mp3");

        let handler = handler_with(FakeTtsClient::new(), None);
        handler.handle(command(destination.clone())).await.unwrap();

        assert!(destination.exists());
    }

    #[tokio::test]
    async fn test_unknown_voice_is_rejected_before_synthesis() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = handler_with(
            FakeTtsClient::new(),
            Some(FakeVoiceCatalog::with_voices(&["zh-CN-XiaoxiaoNeural"])),
        );
        let err = handler.handle(command(destination.clone())).await.unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidVoice(_)));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_unreachable_provider_leaves_destination_untouched() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = handler_with(FakeTtsClient::failing(FakeFault::Unreachable), None);
        let err = handler.handle(command(destination.clone())).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_voice_rejected_by_provider_maps_to_invalid_voice() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = handler_with(FakeTtsClient::failing(FakeFault::RejectVoice), None);
        let err = handler.handle(command(destination.clone())).await.unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidVoice(_)));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_empty_payload_is_a_provider_failure() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = handler_with(FakeTtsClient::with_payload(Vec::new()), None);
        let err = handler.handle(command(destination.clone())).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = GenerateVoiceoverHandler::new(
            Arc::new(FakeTtsClient::new().with_latency(Duration::from_millis(200))),
            None,
            Arc::new(FileAudioStorage::new()),
            Duration::from_millis(20),
        );
        let err = handler.handle(command(destination.clone())).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_second_run_overwrites_first() {
        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp3");

        let handler = handler_with(FakeTtsClient::new(), None);
        let first = handler.handle(command(destination.clone())).await.unwrap();
        let second = handler.handle(command(destination.clone())).await.unwrap();

        assert_eq!(first.audio_bytes, second.audio_bytes);
        assert_eq!(
            std::fs::read(&destination).unwrap().len() as u64,
            second.audio_bytes
        );
    }
}
