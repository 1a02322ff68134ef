//! 应用层错误定义
//!
//! 转换请求的统一错误分类，每个分类对应固定的 kind 与 HTTP 状态码

use thiserror::Error;

use crate::application::ports::TtsError;
use crate::domain::ConversionError;

/// 对外暴露的错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationError,
    Unauthorized,
    Forbidden,
    RateLimit,
    BadRequest,
    ApiError,
    NetworkError,
    ServerError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "validation_error",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::RateLimit => "rate_limit",
            Self::BadRequest => "bad_request",
            Self::ApiError => "api_error",
            Self::NetworkError => "network_error",
            Self::ServerError => "server_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 应用层错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// 请求校验失败
    #[error("{0}")]
    ValidationError(String),

    /// 凭证缺失或被上游拒绝
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    RateLimited(String),

    /// 上游认为请求参数无效
    #[error("{0}")]
    BadRequest(String),

    /// 其他上游错误，保留上游状态码
    #[error("{message}")]
    ApiError { status: u16, message: String },

    /// 无法连接合成服务
    #[error("{0}")]
    NetworkError(String),

    #[error("{0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn network() -> Self {
        Self::NetworkError("Failed to connect to the API service".to_string())
    }

    /// 创建内部错误（对外只暴露固定文案）
    pub fn internal() -> Self {
        Self::InternalError("An unexpected error occurred".to_string())
    }

    /// 按上游状态码归类
    pub fn from_upstream_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized(
                "Invalid API key. Please check your ElevenLabs API key".to_string(),
            ),
            429 => Self::RateLimited("Rate limit exceeded. Please try again later".to_string()),
            400 => Self::BadRequest("Invalid request parameters".to_string()),
            403 => Self::Forbidden("Access denied. Please check your subscription".to_string()),
            _ => Self::ApiError {
                status,
                message: format!("API request failed: {}", body),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationError(_) => ErrorKind::ValidationError,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::RateLimited(_) => ErrorKind::RateLimit,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::ApiError { .. } => ErrorKind::ApiError,
            Self::NetworkError(_) => ErrorKind::NetworkError,
            Self::InternalError(_) => ErrorKind::ServerError,
        }
    }

    /// HTTP 状态码
    ///
    /// ApiError 透传上游状态码；上游状态码不是 4xx/5xx 时返回 502
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError(_) | Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::RateLimited(_) => 429,
            Self::ApiError { status, .. } if (400..600).contains(status) => *status,
            Self::ApiError { .. } => 502,
            Self::NetworkError(_) => 503,
            Self::InternalError(_) => 500,
        }
    }
}

impl From<ConversionError> for ApplicationError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::EmptyText | ConversionError::TextTooLong { .. } => {
                Self::ValidationError(err.to_string())
            }
            ConversionError::MissingCredential => Self::Unauthorized(err.to_string()),
            ConversionError::InvalidVoiceId(_) => Self::internal(),
        }
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::Upstream { status, body } => Self::from_upstream_status(status, &body),
            TtsError::NetworkError(_) | TtsError::Timeout => Self::network(),
            TtsError::InvalidRequest(_) => Self::internal(),
        }
    }
}
