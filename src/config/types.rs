//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::conversion::DEFAULT_VOICE_ID;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 合成服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 合成服务 (ElevenLabs) 配置
#[derive(Clone, Deserialize)]
pub struct TtsConfig {
    /// API Key，未配置时 /convert 返回 401
    #[serde(default)]
    pub api_key: Option<String>,

    /// API 基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// 音色 ID
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// 合成模型
    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_voice_setting")]
    pub stability: f32,

    #[serde(default = "default_voice_setting")]
    pub similarity_boost: f32,
}

fn default_tts_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_model_id() -> String {
    "eleven_monolingual_v1".to_string()
}

fn default_voice_setting() -> f32 {
    0.5
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_tts_base_url(),
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            stability: default_voice_setting(),
            similarity_boost: default_voice_setting(),
        }
    }
}

// api_key 不进入 Debug 输出
impl std::fmt::Debug for TtsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("voice_id", &self.voice_id)
            .field("model_id", &self.model_id)
            .field("stability", &self.stability)
            .field("similarity_boost", &self.similarity_boost)
            .finish()
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 是否在启动时建立连接池
    #[serde(default = "default_db_enabled")]
    pub enabled: bool,

    /// 数据库 URL（仅支持 sqlite）
    #[serde(default = "default_db_url")]
    pub url: String,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// 空闲连接回收时间（秒）
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// 被忽略的 `DATABASE_URL` 协议（非 sqlite），启动时打印警告
    #[serde(default)]
    pub ignored_legacy_scheme: Option<String>,
}

fn default_db_enabled() -> bool {
    true
}

fn default_db_url() -> String {
    "sqlite:data/tts.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: default_db_enabled(),
            url: default_db_url(),
            max_connections: default_max_connections(),
            idle_timeout_secs: default_idle_timeout(),
            ignored_legacy_scheme: None,
        }
    }
}

impl DatabaseConfig {
    /// 数据库文件路径，内存数据库返回 None
    pub fn file_path(&self) -> Option<PathBuf> {
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or_default();
        if path.is_empty() || path == ":memory:" {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
