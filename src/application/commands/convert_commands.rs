//! Conversion Commands - 文本转语音命令

use uuid::Uuid;

/// 文本转语音命令
///
/// text 为 None 表示请求体中缺少该字段
#[derive(Debug, Clone)]
pub struct ConvertTextCommand {
    /// 请求追踪 ID，由 HTTP 层分配
    pub request_id: Uuid,
    pub text: Option<String>,
}

impl ConvertTextCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            text: Some(text.into()),
        }
    }
}

/// 文本转语音响应
#[derive(Debug, Clone)]
pub struct ConvertTextResponse {
    /// 上游返回的原始音频
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}
