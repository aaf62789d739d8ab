//! Voxgen - 宣传片配音生成器
//!
//! 单次任务: 把固定的宣传片旁白交给 Edge 朗读服务合成，
//! 音频写入目标路径后退出。失败时以非零状态码结束

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use voxgen::application::ports::{AudioStoragePort, TtsEnginePort, VoiceCatalogPort};
use voxgen::application::{ApplicationError, GenerateVoiceover, GenerateVoiceoverHandler};
use voxgen::config::{load_config, print_config};
use voxgen::domain::{Script, VoiceSelector};
use voxgen::infrastructure::{
    EdgeTtsClient, EdgeTtsClientConfig, EdgeVoiceCatalog, FileAudioStorage,
};

// 纯文本脚本 - 朗读服务根据标点自动断句停顿。
// 句号和逗号形成自然停顿，换行会被忽略
const PROMO_SCRIPT: &str = concat!(
    "VoiceFlow. ",
    "Type with your voice. ",
    "... ",
    "Typing is slow. ",
    "But speaking? It's three times faster. ",
    "... ",
    "Just press Alt, and start talking. ",
    "VoiceFlow transcribes your words, removes filler, fixes grammar, ",
    "and types the clean text right where your cursor is. ",
    "... ",
    "Works in any app. ",
    "AI powered text cleanup. ",
    "Lightning fast transcription. ",
    "And completely private. ",
    "... ",
    "Simple pricing. Start free with your own API key. ",
    "... ",
    "Download VoiceFlow free today. ",
    "free voice flow dot vercel dot app.",
);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},voxgen={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Voxgen - 宣传片配音生成器");
    print_config(&config);

    // 解析旁白脚本（文件覆盖内置脚本）
    let script_text = match &config.script.path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script file: {}", path.display()))?,
        None => PROMO_SCRIPT.to_string(),
    };
    let script =
        Script::new(script_text).map_err(|e| ApplicationError::validation(e.to_string()))?;
    let voice = VoiceSelector::new(&config.tts.voice)
        .map_err(|e| ApplicationError::validation(e.to_string()))?;

    // 创建 Edge TTS 引擎
    let tts_config =
        EdgeTtsClientConfig::default().with_audio_format(config.tts.audio_format.clone());
    let tts_engine: Arc<dyn TtsEnginePort> = Arc::new(EdgeTtsClient::new(tts_config));

    // 音色目录（预检可关闭，关闭后无效音色由合成调用本身报错）
    let voice_catalog: Option<Arc<dyn VoiceCatalogPort>> = if config.tts.verify_voice {
        Some(Arc::new(
            EdgeVoiceCatalog::with_default_config()
                .map_err(|e| anyhow::anyhow!("Failed to create voice catalog: {}", e))?,
        ))
    } else {
        None
    };

    let audio_storage: Arc<dyn AudioStoragePort> = Arc::new(FileAudioStorage::new());

    let handler = GenerateVoiceoverHandler::new(
        tts_engine,
        voice_catalog,
        audio_storage,
        Duration::from_secs(config.tts.timeout_secs),
    );

    let response = handler
        .handle(GenerateVoiceover {
            script,
            voice,
            destination: config.output.path.clone(),
        })
        .await?;

    tracing::info!(
        destination = %response.destination.display(),
        audio_bytes = response.audio_bytes,
        audio_format = %response.audio_format,
        "Voiceover generation complete"
    );
    println!("Voiceover saved to {}", response.destination.display());

    Ok(())
}
