//! tts-proxy - 文本转语音代理服务
//!
//! 启动流程: 配置 → 日志 → 数据库 → ElevenLabs 客户端 → HTTP 服务器

use std::sync::Arc;

use tts_proxy::application::{ConversionSettings, ConvertTextHandler, VoiceSettings};
use tts_proxy::config::{load_config, print_config, LogConfig};
use tts_proxy::infrastructure::adapters::{ElevenLabsClient, ElevenLabsClientConfig};
use tts_proxy::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tts_proxy::infrastructure::persistence::sqlite::{create_pool, DatabaseConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},tts_proxy={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("tts-proxy v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 初始化数据库（不存储领域数据）
    let db_pool = if config.database.enabled {
        if let Some(path) = config.database.file_path() {
            if let Some(parent) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let db_config = DatabaseConfig {
            database_url: config.database.url.clone(),
            max_connections: config.database.max_connections,
            idle_timeout_secs: config.database.idle_timeout_secs,
        };
        Some(create_pool(&db_config).await?)
    } else {
        None
    };

    // 创建 ElevenLabs 客户端
    let engine = Arc::new(ElevenLabsClient::new(ElevenLabsClientConfig::new(
        config.tts.base_url.clone(),
    ))?);

    let settings = ConversionSettings::new(config.tts.api_key.as_deref(), &config.tts.voice_id)?
        .with_model(config.tts.model_id.clone())
        .with_voice_settings(VoiceSettings {
            stability: config.tts.stability,
            similarity_boost: config.tts.similarity_boost,
        });

    if !settings.has_credential() {
        tracing::warn!("ElevenLabs API key is not configured; /convert will respond with 401");
    }

    let state = AppState::new(ConvertTextHandler::new(engine, settings), db_pool);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
