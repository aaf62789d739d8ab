//! Fake Voice Catalog - 用于测试的内存音色目录

use async_trait::async_trait;

use crate::application::ports::{CatalogError, VoiceCatalogPort, VoiceInfo};

/// Fake Voice Catalog
///
/// 持有一组固定音色短名，不访问网络
pub struct FakeVoiceCatalog {
    voices: Vec<VoiceInfo>,
}

impl FakeVoiceCatalog {
    /// 用一组音色短名创建目录
    pub fn with_voices(short_names: &[&str]) -> Self {
        let voices = short_names
            .iter()
            .map(|short_name| {
                let locale = short_name
                    .rsplitn(2, '-')
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                VoiceInfo {
                    name: format!(
                        "Microsoft Server Speech Text to Speech Voice ({})",
                        short_name
                    ),
                    short_name: short_name.to_string(),
                    gender: String::new(),
                    locale,
                    friendly_name: String::new(),
                    status: "GA".to_string(),
                    suggested_codec: "audio-24khz-48kbitrate-mono-mp3".to_string(),
                }
            })
            .collect();

        Self { voices }
    }
}

#[async_trait]
impl VoiceCatalogPort for FakeVoiceCatalog {
    async fn find_voice(&self, short_name: &str) -> Result<Option<VoiceInfo>, CatalogError> {
        Ok(self
            .voices
            .iter()
            .find(|v| v.short_name.eq_ignore_ascii_case(short_name))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let catalog = FakeVoiceCatalog::with_voices(&["en-US-AndrewNeural"]);

        let found = catalog.find_voice("en-us-andrewneural").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().locale, "en-US");

        let missing = catalog.find_voice("xx-XX-NoSuchNeural").await.unwrap();
        assert!(missing.is_none());
    }
}
