//! Turns a stream of speech-to-text segments into complete utterances.
//!
//! An utterance is complete once no final segment has arrived for the silence
//! threshold. The same utterance is never handed out twice in a row.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    #[serde(default)]
    pub is_final: bool,
}

#[derive(Debug)]
pub struct TranscriptAssembler {
    silence: Duration,
    committed: Vec<String>,
    interim: String,
    deadline: Option<Instant>,
    last_processed: Option<String>,
}

impl TranscriptAssembler {
    pub fn new(silence: Duration) -> Self {
        Self {
            silence,
            committed: Vec::new(),
            interim: String::new(),
            deadline: None,
            last_processed: None,
        }
    }

    /// Records a segment. A non-blank final segment restarts the silence
    /// window and returns the instant at which the utterance may be taken.
    pub fn push(&mut self, segment: TranscriptSegment, now: Instant) -> Option<Instant> {
        if !segment.is_final {
            self.interim = segment.text;
            return None;
        }

        let text = segment.text.trim();
        if text.is_empty() {
            return None;
        }
        self.committed.push(text.to_string());
        self.interim.clear();

        let deadline = now + self.silence;
        self.deadline = Some(deadline);
        Some(deadline)
    }

    /// Everything heard so far, finals first, then the pending interim text.
    pub fn current(&self) -> String {
        let mut text = self.committed.join(" ");
        if !self.interim.trim().is_empty() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(self.interim.trim());
        }
        text
    }

    /// Takes the utterance once the silence window has elapsed. Returns `None`
    /// while speech is still arriving, or when it repeats the last command.
    pub fn take_ready(&mut self, now: Instant) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        let text = self.current();
        self.deadline = None;
        self.committed.clear();
        self.interim.clear();

        if text.is_empty() || self.last_processed.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last_processed = Some(text.clone());
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, is_final: bool) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            is_final,
        }
    }

    const SILENCE: Duration = Duration::from_millis(3000);

    #[test]
    fn test_waits_for_silence() {
        let mut asm = TranscriptAssembler::new(SILENCE);
        let t0 = Instant::now();
        let deadline = asm.push(segment("find react", true), t0).unwrap();
        assert_eq!(deadline, t0 + SILENCE);

        assert_eq!(asm.take_ready(t0 + Duration::from_millis(2999)), None);
        assert_eq!(asm.take_ready(deadline).as_deref(), Some("find react"));
    }

    #[test]
    fn test_later_final_extends_window_and_joins() {
        let mut asm = TranscriptAssembler::new(SILENCE);
        let t0 = Instant::now();
        asm.push(segment("find react", true), t0);
        asm.push(segment(" jobs in austin ", true), t0 + Duration::from_millis(2000));
        asm.push(segment("remote", false), t0 + Duration::from_millis(2500));

        assert_eq!(asm.take_ready(t0 + SILENCE), None);
        assert_eq!(
            asm.take_ready(t0 + Duration::from_millis(5000)).as_deref(),
            Some("find react jobs in austin remote")
        );
    }

    #[test]
    fn test_interim_alone_never_completes() {
        let mut asm = TranscriptAssembler::new(SILENCE);
        let t0 = Instant::now();
        assert_eq!(asm.push(segment("next", false), t0), None);
        assert_eq!(asm.push(segment("   ", true), t0), None);
        assert_eq!(asm.take_ready(t0 + Duration::from_secs(10)), None);
        assert_eq!(asm.current(), "next");
    }

    #[test]
    fn test_repeat_of_last_command_is_dropped() {
        let mut asm = TranscriptAssembler::new(SILENCE);
        let t0 = Instant::now();
        asm.push(segment("next job", true), t0);
        assert!(asm.take_ready(t0 + SILENCE).is_some());

        let t1 = t0 + Duration::from_secs(5);
        asm.push(segment("next job", true), t1);
        assert_eq!(asm.take_ready(t1 + SILENCE), None);

        let t2 = t1 + Duration::from_secs(5);
        asm.push(segment("save this job", true), t2);
        assert_eq!(asm.take_ready(t2 + SILENCE).as_deref(), Some("save this job"));
    }
}
