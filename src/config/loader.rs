//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`TTS_PROXY_` 前缀）
//! 2. 配置文件（config.toml）
//! 3. 兼容旧部署的环境变量（`ELEVEN_LABS_API_KEY`, `DATABASE_URL`）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 旧部署使用的凭证变量
const LEGACY_API_KEY_VAR: &str = "ELEVEN_LABS_API_KEY";

/// 旧部署使用的数据库变量
const LEGACY_DATABASE_URL_VAR: &str = "DATABASE_URL";

/// 加载应用配置
///
/// # 环境变量示例
/// - `TTS_PROXY_SERVER__PORT=8080`
/// - `TTS_PROXY_TTS__API_KEY=sk_...`
/// - `TTS_PROXY_TTS__VOICE_ID=21m00Tcm4TlvDq8ikWAM`
/// - `TTS_PROXY_DATABASE__ENABLED=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(config_path, |name| std::env::var(name).ok())
}

/// 使用给定的旧变量查找函数加载配置
fn load_config_with_env<F>(config_path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("tts.base_url", "https://api.elevenlabs.io")?
        .set_default("tts.voice_id", crate::domain::conversion::DEFAULT_VOICE_ID)?
        .set_default("tts.model_id", "eleven_monolingual_v1")?
        .set_default("tts.stability", 0.5)?
        .set_default("tts.similarity_boost", 0.5)?
        .set_default("database.enabled", true)?
        .set_default("database.url", "sqlite:data/tts.db?mode=rwc")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 旧部署变量，高于默认值、低于配置文件
    for (key, value) in legacy_overrides(lookup) {
        builder = builder.set_default(key, value)?;
    }

    // 3. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 4. 环境变量（最高优先级）
    // 例如: TTS_PROXY_TTS__API_KEY=sk_...
    builder = builder.add_source(
        Environment::with_prefix("TTS_PROXY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 把旧部署的环境变量映射到配置键
fn legacy_overrides<F>(lookup: F) -> Vec<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let mut overrides = Vec::new();

    if let Some(key) = lookup(LEGACY_API_KEY_VAR) {
        overrides.push(("tts.api_key", key));
    }

    // 旧部署常把 DATABASE_URL 指向 Postgres；只接管 sqlite，其余协议关闭连接池
    if let Some(url) = lookup(LEGACY_DATABASE_URL_VAR) {
        if url.starts_with("sqlite:") {
            overrides.push(("database.url", normalize_database_url(&url)));
        } else {
            let scheme = url.split(':').next().unwrap_or_default().to_string();
            overrides.push(("database.enabled", "false".to_string()));
            overrides.push(("database.ignored_legacy_scheme", scheme));
        }
    }

    overrides
}

/// `sqlite:///tts.db` 形式的 URL 指向相对路径，转换为 sqlx 的写法
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("sqlite:///") {
        Some(path) if !url.contains('?') => format!("sqlite:{}?mode=rwc", path),
        Some(path) => format!("sqlite:{}", path),
        None => url.to_string(),
    }
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.voice_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS voice id cannot be empty".to_string(),
        ));
    }

    for (name, value) in [
        ("stability", config.tts.stability),
        ("similarity_boost", config.tts.similarity_boost),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ValidationError(format!(
                "TTS {} must be between 0 and 1, got {}",
                name, value
            )));
        }
    }

    if config.database.enabled && !config.database.url.starts_with("sqlite:") {
        return Err(ConfigError::ValidationError(format!(
            "Only sqlite database URLs are supported, got {}",
            config.database.url
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("TTS Base URL: {}", config.tts.base_url);
    tracing::info!(
        "TTS API Key: {}",
        if config.tts.api_key.is_some() { "set" } else { "not set" }
    );
    tracing::info!("TTS Voice: {}", config.tts.voice_id);
    tracing::info!("TTS Model: {}", config.tts.model_id);
    if let Some(scheme) = &config.database.ignored_legacy_scheme {
        tracing::warn!(
            scheme = %scheme,
            "{} is not a sqlite URL; database pool disabled",
            LEGACY_DATABASE_URL_VAR
        );
    }
    tracing::info!("Database Enabled: {}", config.database.enabled);
    if config.database.enabled {
        tracing::info!("Database: {}", config.database.url);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
