//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;

pub use adapters::{
    EdgeTtsClient, EdgeTtsClientConfig, EdgeVoiceCatalog, EdgeVoiceCatalogConfig, FakeFault,
    FakeTtsClient, FakeVoiceCatalog, FileAudioStorage,
};
