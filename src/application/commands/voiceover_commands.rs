//! Voiceover Commands

use std::path::PathBuf;

use crate::domain::{Script, VoiceSelector};

/// 生成配音命令
///
/// 一次完整的配音生成: 合成 script 指定的旁白并写入 destination
#[derive(Debug, Clone)]
pub struct GenerateVoiceover {
    pub script: Script,
    pub voice: VoiceSelector,
    pub destination: PathBuf,
}
