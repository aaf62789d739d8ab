//! Edge Voice Catalog - 朗读服务音色列表
//!
//! 实现 VoiceCatalogPort trait，通过 HTTP 拉取服务端公开的音色列表
//!
//! 外部接口:
//! GET https://speech.platform.bing.com/consumer/speech/synthesize/readaloud/voices/list
//! Query: trustedclienttoken（服务公开的客户端令牌，无需账号凭据）
//! Response: JSON 数组，字段为 PascalCase

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{CatalogError, VoiceCatalogPort, VoiceInfo};

/// 朗读服务公开的客户端令牌
const TRUSTED_CLIENT_TOKEN: &str = "6A5AA1D4EAFF4E9FB37E23D68491D6F4";

fn default_voices_url() -> String {
    format!(
        "https://speech.platform.bing.com/consumer/speech/synthesize/readaloud/voices/list?trustedclienttoken={}",
        TRUSTED_CLIENT_TOKEN
    )
}

/// Edge 音色目录配置
#[derive(Debug, Clone)]
pub struct EdgeVoiceCatalogConfig {
    /// 音色列表接口 URL（含令牌）
    pub voices_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for EdgeVoiceCatalogConfig {
    fn default() -> Self {
        Self {
            voices_url: default_voices_url(),
            timeout_secs: 30,
        }
    }
}

/// Edge 音色目录
pub struct EdgeVoiceCatalog {
    client: Client,
    config: EdgeVoiceCatalogConfig,
}

impl EdgeVoiceCatalog {
    /// 创建新的音色目录客户端
    pub fn new(config: EdgeVoiceCatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建
    pub fn with_default_config() -> Result<Self, CatalogError> {
        Self::new(EdgeVoiceCatalogConfig::default())
    }

    /// 拉取完整音色列表
    async fn fetch_voices(&self) -> Result<Vec<VoiceInfo>, CatalogError> {
        let response = self
            .client
            .get(&self.config.voices_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    CatalogError::NetworkError(format!("Cannot reach voice list service: {}", e))
                } else {
                    CatalogError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let voices: Vec<VoiceInfo> = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse voice list: {}", e)))?;

        tracing::debug!(voice_count = voices.len(), "Fetched voice list");

        Ok(voices)
    }
}

#[async_trait]
impl VoiceCatalogPort for EdgeVoiceCatalog {
    async fn find_voice(&self, short_name: &str) -> Result<Option<VoiceInfo>, CatalogError> {
        let voices = self.fetch_voices().await?;
        Ok(voices
            .into_iter()
            .find(|v| v.short_name.eq_ignore_ascii_case(short_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_carries_token() {
        let config = EdgeVoiceCatalogConfig::default();
        assert!(config.voices_url.contains("trustedclienttoken="));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_voice_list_json_shape() {
        // 服务端返回的条目结构（节选字段）
        let json = r#"[
            {
                "Name": "Microsoft Server Speech Text to Speech Voice (en-US, AndrewNeural)",
                "ShortName": "en-US-AndrewNeural",
                "Gender": "Male",
                "Locale": "en-US",
                "FriendlyName": "Microsoft Andrew Online (Natural) - English (United States)",
                "Status": "GA",
                "SuggestedCodec": "audio-24khz-48kbitrate-mono-mp3"
            }
        ]"#;

        let voices: Vec<VoiceInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0].short_name, "en-US-AndrewNeural");
        assert_eq!(voices[0].locale, "en-US");
    }
}
