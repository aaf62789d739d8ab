//! Voice Catalog Port - 音色目录抽象
//!
//! 查询合成服务公开的音色列表，用于在发起合成前识别无效音色

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 音色目录错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 服务端音色条目
///
/// 字段名对应朗读服务音色列表接口的 JSON 结构
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceInfo {
    /// 完整音色名
    pub name: String,
    /// 音色短名（如 en-US-AndrewNeural）
    pub short_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub suggested_codec: String,
}

/// Voice Catalog Port
#[async_trait]
pub trait VoiceCatalogPort: Send + Sync {
    /// 按短名查找音色，大小写不敏感
    ///
    /// 返回 `Ok(None)` 表示服务端不认识该音色
    async fn find_voice(&self, short_name: &str) -> Result<Option<VoiceInfo>, CatalogError>;
}
