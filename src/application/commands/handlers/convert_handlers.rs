//! Conversion Command Handlers

use std::sync::Arc;

use crate::application::commands::{ConvertTextCommand, ConvertTextResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesisPort, SynthesisRequest, VoiceSettings};
use crate::domain::{ApiKey, ConversionError, SpeechText, VoiceId};

/// 合成输出的 MIME 类型
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// 默认合成模型
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

/// 启动时确定的转换参数
#[derive(Debug, Clone)]
pub struct ConversionSettings {
    api_key: Option<ApiKey>,
    voice_id: VoiceId,
    model_id: String,
    voice_settings: VoiceSettings,
}

impl ConversionSettings {
    /// api_key 为空或占位值时视为未配置，请求阶段返回 401
    pub fn new(api_key: Option<&str>, voice_id: &str) -> Result<Self, ConversionError> {
        Ok(Self {
            api_key: ApiKey::from_config(api_key),
            voice_id: VoiceId::new(voice_id)?,
            model_id: DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
        })
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_voice_settings(mut self, voice_settings: VoiceSettings) -> Self {
        self.voice_settings = voice_settings;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// ConvertText Handler - 校验请求并调用合成服务
pub struct ConvertTextHandler {
    engine: Arc<dyn SpeechSynthesisPort>,
    settings: ConversionSettings,
}

impl ConvertTextHandler {
    pub fn new(engine: Arc<dyn SpeechSynthesisPort>, settings: ConversionSettings) -> Self {
        Self { engine, settings }
    }

    /// 凭证检查，先于文本校验执行
    pub fn ensure_credential(&self) -> Result<&ApiKey, ApplicationError> {
        self.settings
            .api_key
            .as_ref()
            .ok_or_else(|| ConversionError::MissingCredential.into())
    }

    /// 校验请求，不产生任何网络调用
    pub fn validate(
        &self,
        cmd: ConvertTextCommand,
    ) -> Result<(&ApiKey, SpeechText), ApplicationError> {
        let api_key = self.ensure_credential()?;
        let text = SpeechText::new(cmd.text.unwrap_or_default())?;
        Ok((api_key, text))
    }

    pub async fn handle(
        &self,
        cmd: ConvertTextCommand,
    ) -> Result<ConvertTextResponse, ApplicationError> {
        let request_id = cmd.request_id;
        let (api_key, text) = self.validate(cmd).map_err(|e| {
            tracing::debug!(request_id = %request_id, kind = %e.kind(), "Conversion rejected");
            e
        })?;

        tracing::info!(
            request_id = %request_id,
            text_chars = text.char_count(),
            voice_id = %self.settings.voice_id,
            "Converting text to speech"
        );

        let request = SynthesisRequest {
            text: text.into_inner(),
            voice_id: self.settings.voice_id.as_str().to_string(),
            model_id: self.settings.model_id.clone(),
            voice_settings: self.settings.voice_settings,
            api_key: api_key.expose().to_string(),
        };

        // 上游调用在独立任务中完成，客户端断开不会中断它
        let engine = Arc::clone(&self.engine);
        let outcome = tokio::spawn(async move { engine.synthesize(request).await })
            .await
            .map_err(|e| {
                tracing::error!(request_id = %request_id, error = %e, "Synthesis task failed");
                ApplicationError::internal()
            })?;

        let response = outcome.map_err(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Synthesis failed");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            request_id = %request_id,
            audio_size = response.audio_data.len(),
            "Conversion completed"
        );

        Ok(ConvertTextResponse {
            audio_data: response.audio_data,
            content_type: AUDIO_MPEG,
        })
    }
}
