//! Catalog Adapters - 音色目录适配器

mod edge_voice_catalog;
mod fake_voice_catalog;

pub use edge_voice_catalog::{EdgeVoiceCatalog, EdgeVoiceCatalogConfig};
pub use fake_voice_catalog::FakeVoiceCatalog;
