//! Conversion Context - 文本转语音限界上下文
//!
//! 职责:
//! - 待合成文本的长度约束
//! - 合成服务凭证的有效性
//! - 固定音色标识

mod errors;
mod value_objects;

pub use errors::ConversionError;
pub use value_objects::{
    ApiKey, SpeechText, VoiceId, DEFAULT_VOICE_ID, MAX_TEXT_CHARS, PLACEHOLDER_API_KEY,
};
