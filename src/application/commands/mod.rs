//! 应用层 - 命令（写操作）
//!
//! 本系统只有一个写操作: 生成配音

mod voiceover_commands;

pub mod handlers;

pub use voiceover_commands::*;
