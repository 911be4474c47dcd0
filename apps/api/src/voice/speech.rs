//! Text-to-speech output. Fire-and-forget: callers hand over text and move on.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Voice parameters sent along with every utterance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 0.8,
        }
    }
}

pub trait SpeechOutput: Send + Sync {
    fn speak(&self, text: &str);
}

/// Emits each utterance as a structured log event. Clients read the text they
/// should synthesize from the session snapshot, not from here.
pub struct LoggedSpeech {
    settings: SpeechSettings,
}

impl LoggedSpeech {
    pub fn new(settings: SpeechSettings) -> Self {
        Self { settings }
    }
}

impl SpeechOutput for LoggedSpeech {
    fn speak(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        info!(
            rate = self.settings.rate,
            pitch = self.settings.pitch,
            volume = self.settings.volume,
            text,
            "Speaking"
        );
    }
}
