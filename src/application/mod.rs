//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesis）
//! - commands: 文本转语音命令及处理器
//! - error: 应用层错误分类

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{ConversionSettings, ConvertTextHandler, AUDIO_MPEG, DEFAULT_MODEL_ID},
    ConvertTextCommand, ConvertTextResponse,
};

pub use error::{ApplicationError, ErrorKind};

pub use ports::{SpeechSynthesisPort, SynthesisRequest, SynthesisResponse, TtsError, VoiceSettings};
