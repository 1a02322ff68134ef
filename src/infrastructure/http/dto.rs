//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::ErrorKind;

/// POST /convert 请求体
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// 缺失或为 null 时由校验阶段报告 validation_error
    #[serde(default)]
    pub text: Option<String>,
}

/// 统一错误响应格式
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error: kind.as_str().to_string(),
            message: message.into(),
        }
    }
}

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// ok / unavailable / disabled
    pub database: &'static str,
}
