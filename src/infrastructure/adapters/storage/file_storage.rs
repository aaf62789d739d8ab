//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait。
//! 写入流程: 先写同目录临时文件，再 rename 到目标路径，
//! 失败的写入不会在目标路径留下半成品

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 文件系统音频存储
#[derive(Debug, Default)]
pub struct FileAudioStorage;

impl FileAudioStorage {
    /// 创建新的文件存储
    pub fn new() -> Self {
        Self
    }

    /// 目标路径旁的临时文件路径
    ///
    /// 临时文件必须与目标同目录，rename 才不会跨文件系统
    fn temp_path(destination: &Path) -> Result<PathBuf, AudioStorageError> {
        let file_name = destination.file_name().ok_or_else(|| {
            AudioStorageError::InvalidDestination(format!(
                "destination has no file name: {}",
                destination.display()
            ))
        })?;

        let temp_name = format!("{}.tmp-{}", file_name.to_string_lossy(), Uuid::new_v4());
        Ok(destination.with_file_name(temp_name))
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    async fn save(&self, destination: &Path, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        }

        let temp_path = Self::temp_path(destination)?;

        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(AudioStorageError::IoError(e.to_string()));
        }

        if let Err(e) = fs::rename(&temp_path, destination).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(AudioStorageError::IoError(e.to_string()));
        }

        tracing::debug!(
            destination = %destination.display(),
            size = data.len(),
            "Saved audio artifact"
        );

        Ok(destination.to_path_buf())
    }
}
