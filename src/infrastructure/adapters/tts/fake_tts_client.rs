//! Fake TTS Client - 用于测试的合成客户端
//!
//! 按预设结果返回，不实际调用外部服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{
    SpeechSynthesisPort, SynthesisRequest, SynthesisResponse, TtsError,
};

/// 预设结果
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    /// 成功返回音频
    Audio(Vec<u8>),
    /// 上游返回非 200 状态码
    Status { status: u16, body: String },
    /// 连接失败
    NetworkFailure,
    /// 合成任务崩溃
    Panic,
}

/// Fake TTS Client
///
/// 记录调用次数和最后一次请求，供测试断言
pub struct FakeTtsClient {
    outcome: FakeOutcome,
    calls: AtomicUsize,
    last_request: Mutex<Option<SynthesisRequest>>,
}

impl FakeTtsClient {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SynthesisRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SpeechSynthesisPort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "FakeTtsClient: returning scripted outcome"
        );

        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request);
        }

        match &self.outcome {
            FakeOutcome::Audio(audio) => Ok(SynthesisResponse {
                audio_data: audio.clone(),
            }),
            FakeOutcome::Status { status, body } => Err(TtsError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            FakeOutcome::NetworkFailure => Err(TtsError::NetworkError(
                "FakeTtsClient: connection refused".to_string(),
            )),
            FakeOutcome::Panic => panic!("FakeTtsClient: scripted panic"),
        }
    }
}
