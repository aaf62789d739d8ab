//! Voxgen - 宣传片配音生成器
//!
//! 架构设计: Hexagonal Architecture（缩减版，单一用例）
//!
//! 领域层 (domain/):
//! - Voiceover Context: 旁白脚本与音色值对象
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, VoiceCatalog, AudioStorage）
//! - Commands: GenerateVoiceover 命令及处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Edge 朗读服务客户端、音色目录、文件落盘

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
