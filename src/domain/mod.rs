//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Conversion Context: 文本转语音请求的校验规则

pub mod conversion;

pub use conversion::{
    ApiKey, ConversionError, SpeechText, VoiceId, DEFAULT_VOICE_ID, MAX_TEXT_CHARS,
};
