//! TTS Adapters - 合成引擎适配器

mod edge_tts_client;
mod fake_tts_client;

pub use edge_tts_client::{EdgeTtsClient, EdgeTtsClientConfig};
pub use fake_tts_client::{FakeFault, FakeTtsClient};
