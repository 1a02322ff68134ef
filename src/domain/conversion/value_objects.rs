//! Conversion Context - Value Objects

use super::ConversionError;

/// 单次请求允许的最大字符数（按 Unicode 字符计，而非字节）
pub const MAX_TEXT_CHARS: usize = 5000;

/// 部署模板中的占位凭证，视同未配置
pub const PLACEHOLDER_API_KEY: &str = "your-api-key";

/// 默认音色 (ElevenLabs "Rachel")
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// 待合成文本
///
/// 不变量:
/// - 非空
/// - 字符数 <= MAX_TEXT_CHARS
/// - 原样保留（不做 trim）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn new(text: impl Into<String>) -> Result<Self, ConversionError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ConversionError::EmptyText);
        }

        let actual = text.chars().count();
        if actual > MAX_TEXT_CHARS {
            return Err(ConversionError::TextTooLong {
                max: MAX_TEXT_CHARS,
                actual,
            });
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 合成服务凭证
///
/// Debug 输出不包含原文，避免凭证进入日志
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Result<Self, ConversionError> {
        let raw = raw.into();
        // 原样转发，只有空串和占位值视为未配置
        if raw.is_empty() || raw == PLACEHOLDER_API_KEY {
            return Err(ConversionError::MissingCredential);
        }
        Ok(Self(raw))
    }

    /// 从可选配置项构造，未配置或占位值返回 None
    pub fn from_config(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| Self::new(value).ok())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 音色标识
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, ConversionError> {
        let id = id.into();
        if id.trim().is_empty() || id.contains('/') {
            return Err(ConversionError::InvalidVoiceId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoiceId {
    fn default() -> Self {
        Self(DEFAULT_VOICE_ID.to_string())
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
