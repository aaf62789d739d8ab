//! Voiceover Context - 配音限界上下文
//!
//! 职责:
//! - 旁白脚本与音色选择的值对象及其校验

mod errors;
mod value_objects;

pub use errors::VoiceoverError;
pub use value_objects::{Script, VoiceSelector};
