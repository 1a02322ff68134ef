//! Conversion Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("No text provided")]
    EmptyText,

    #[error("Text exceeds maximum length of {max} characters")]
    TextTooLong { max: usize, actual: usize },

    #[error("API key not configured. Please configure a valid ElevenLabs API key")]
    MissingCredential,

    #[error("Invalid voice id: {0:?}")]
    InvalidVoiceId(String),
}
