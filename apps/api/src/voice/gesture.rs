//! Hand gestures and the cooldown gate in front of them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::voice::intent::Intent;

const SWIPE_COOLDOWN: Duration = Duration::from_millis(1000);
const STATIC_COOLDOWN: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gesture {
    ThumbsUp,
    ThumbsDown,
    SwipeLeft,
    SwipeRight,
}

impl Gesture {
    pub fn cooldown(self) -> Duration {
        match self {
            Gesture::SwipeLeft | Gesture::SwipeRight => SWIPE_COOLDOWN,
            Gesture::ThumbsUp | Gesture::ThumbsDown => STATIC_COOLDOWN,
        }
    }

    /// Thumbs-up and swipe-right save; thumbs-down and swipe-left move on.
    pub fn intent(self) -> Intent {
        match self {
            Gesture::ThumbsUp | Gesture::SwipeRight => Intent::Save,
            Gesture::ThumbsDown | Gesture::SwipeLeft => Intent::Navigate,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().replace('_', "-").as_str() {
            "thumbs-up" => Some(Gesture::ThumbsUp),
            "thumbs-down" => Some(Gesture::ThumbsDown),
            "swipe-left" => Some(Gesture::SwipeLeft),
            "swipe-right" => Some(Gesture::SwipeRight),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gesture::ThumbsUp => "thumbs-up",
            Gesture::ThumbsDown => "thumbs-down",
            Gesture::SwipeLeft => "swipe-left",
            Gesture::SwipeRight => "swipe-right",
        }
    }
}

/// One timestamp shared by every gesture kind: any accepted gesture starts the
/// window, and the incoming gesture's own cooldown decides whether it passes.
#[derive(Debug, Default)]
pub struct GestureGate {
    last_accepted: Option<Instant>,
}

impl GestureGate {
    pub fn try_accept(&mut self, gesture: Gesture, now: Instant) -> bool {
        let open = match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) > gesture.cooldown(),
            None => true,
        };
        if open {
            self.last_accepted = Some(now);
        }
        open
    }
}
