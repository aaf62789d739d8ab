//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod catalog;
pub mod storage;
pub mod tts;

pub use catalog::*;
pub use storage::*;
pub use tts::*;
