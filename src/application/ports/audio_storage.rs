//! Audio Storage Port - 出站端口
//!
//! 定义音频产物落盘的抽象接口

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Storage Port
///
/// 将一段合成好的音频字节写入目标路径
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 持久化音频数据到 destination，覆盖已有文件
    ///
    /// 实现必须保证失败时 destination 不被破坏（写临时文件后重命名）
    async fn save(&self, destination: &Path, data: &[u8]) -> Result<PathBuf, AudioStorageError>;
}
