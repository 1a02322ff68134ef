//! Speech Synthesis Port - 语音合成服务抽象
//!
//! 定义调用外部合成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// 合成服务错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 上游返回非 200 状态码
    #[error("Upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 请求无法构造（非网络原因）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// 音色参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

/// 合成请求
#[derive(Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本（已校验）
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    /// 上游凭证
    pub api_key: String,
}

impl std::fmt::Debug for SynthesisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesisRequest")
            .field("text_len", &self.text.len())
            .field("voice_id", &self.voice_id)
            .field("model_id", &self.model_id)
            .field("voice_settings", &self.voice_settings)
            .finish_non_exhaustive()
    }
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 原始音频数据（MP3）
    pub audio_data: Vec<u8>,
}

/// Speech Synthesis Port
///
/// 外部合成服务的抽象接口
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// 发送文本到外部合成服务，返回音频数据
    ///
    /// 只调用一次，不做重试
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError>;
}
