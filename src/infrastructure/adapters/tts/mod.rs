//! TTS Adapter - 合成服务客户端实现

mod elevenlabs_client;
#[cfg(test)]
mod fake_tts_client;

pub use elevenlabs_client::*;
#[cfg(test)]
pub use fake_tts_client::{FakeOutcome, FakeTtsClient};
