//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Voiceover Context: 配音脚本与音色

pub mod voiceover;

pub use voiceover::{Script, VoiceSelector, VoiceoverError};
