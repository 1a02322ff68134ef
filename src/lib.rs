//! tts-proxy - ElevenLabs 文本转语音代理
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Conversion Context: 文本与凭证校验
//!
//! 应用层 (application/):
//! - Ports: SpeechSynthesisPort
//! - Commands: ConvertText 命令处理器
//! - Error: 对外错误分类
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 首页 + /convert
//! - Adapters: ElevenLabs 客户端
//! - Persistence: SQLite 连接池

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
