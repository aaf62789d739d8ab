//! Command Handlers

mod voiceover_handlers;

pub use voiceover_handlers::{GenerateVoiceoverHandler, GenerateVoiceoverResponse};
