//! ElevenLabs Client - 调用 ElevenLabs 文本转语音 HTTP API
//!
//! 实现 SpeechSynthesisPort trait
//!
//! 外部 API:
//! POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}
//! Headers: xi-api-key, Accept: audio/mpeg
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::application::ports::{
    SpeechSynthesisPort, SynthesisRequest, SynthesisResponse, TtsError, VoiceSettings,
};

/// 默认 API 地址
pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// 请求体 (JSON)
#[derive(Debug, Serialize)]
struct ElevenLabsHttpRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL（测试时指向本地 mock）
    pub base_url: String,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: ELEVENLABS_BASE_URL.to_string(),
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// ElevenLabs 客户端
///
/// 不设置超时、不重试，使用 reqwest 默认行为
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesize_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        )
    }
}

fn classify_send_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("Cannot connect to ElevenLabs: {}", e))
    } else if e.is_builder() {
        TtsError::InvalidRequest(e.to_string())
    } else {
        TtsError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl SpeechSynthesisPort for ElevenLabsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let url = self.synthesize_url(&request.voice_id);
        let body = ElevenLabsHttpRequest {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: request.voice_settings,
        };

        tracing::debug!(
            url = %url,
            text_len = request.text.len(),
            model_id = %request.model_id,
            "Sending ElevenLabs synthesis request"
        );

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "audio/mpeg")
            .header("xi-api-key", &request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "ElevenLabs returned an error status");
            return Err(TtsError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::NetworkError(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::debug!(audio_size = audio_data.len(), "ElevenLabs synthesis completed");

        Ok(SynthesisResponse { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ElevenLabsClientConfig::default();
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
    }

    #[test]
    fn test_synthesize_url() {
        let client =
            ElevenLabsClient::new(ElevenLabsClientConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(
            client.synthesize_url("21m00Tcm4TlvDq8ikWAM"),
            "http://localhost:9000/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = ElevenLabsHttpRequest {
            text: "hello",
            model_id: "eleven_monolingual_v1",
            voice_settings: VoiceSettings::default(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hello",
                "model_id": "eleven_monolingual_v1",
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 }
            })
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // 端口 1 上没有服务
        let client =
            ElevenLabsClient::new(ElevenLabsClientConfig::new("http://127.0.0.1:1")).unwrap();
        let request = SynthesisRequest {
            text: "hello".into(),
            voice_id: "voice".into(),
            model_id: "model".into(),
            voice_settings: VoiceSettings::default(),
            api_key: "key".into(),
        };

        let err = client.synthesize(request).await.unwrap_err();
        assert!(matches!(err, TtsError::NetworkError(_)), "got {:?}", err);
    }
}
