//! Command Dispatcher — applies classified commands to one session.
//!
//! The shared services (classifier, pipeline, speech) are stateless; the only
//! mutable data is this session's `SessionState`. The state lock is released
//! while a search runs, and a result is committed only if no newer search has
//! started since.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::models::JobPosting;
use crate::search::{SearchPipeline, SearchResult};
use crate::session::state::{Effect, SessionSnapshot, SessionState};
use crate::voice::narrative::job_summary;
use crate::voice::{
    CommandParams, Direction, Gesture, Intent, IntentClassifier, SpeechOutput, TranscriptSegment,
    VoiceCommand,
};

const NO_JOBS_FOR_GESTURES: &str = "Please search for jobs first before using gestures.";
const ALREADY_SAVED: &str = "This job is already saved.";
const NO_RESULTS: &str = "I couldn't find any jobs matching your criteria. Try a different search.";

#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    pub command: VoiceCommand,
    /// Spoken after the command response, e.g. the first result's summary.
    pub follow_up: Option<String>,
    pub session: SessionSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptAck {
    pub heard: String,
    pub pending: bool,
}

pub struct CommandDispatcher {
    classifier: Arc<IntentClassifier>,
    pipeline: Arc<SearchPipeline>,
    speech: Arc<dyn SpeechOutput>,
    state: Mutex<SessionState>,
}

impl CommandDispatcher {
    pub fn new(
        classifier: Arc<IntentClassifier>,
        pipeline: Arc<SearchPipeline>,
        speech: Arc<dyn SpeechOutput>,
        state: SessionState,
    ) -> Self {
        Self {
            classifier,
            pipeline,
            speech,
            state: Mutex::new(state),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn saved_jobs(&self) -> Vec<JobPosting> {
        self.state.lock().await.saved().list().to_vec()
    }

    pub async fn remove_saved(&self, display_key: &str) -> Vec<JobPosting> {
        let removed = self.state.lock().await.saved_mut().remove_by_key(display_key);
        for job in &removed {
            info!(job_id = %job.id, display_key, "Removed saved job");
        }
        removed
    }

    /// Classifies an utterance and applies it. A search suspends until the
    /// pipeline finishes.
    pub async fn dispatch_utterance(&self, text: &str) -> DispatchOutcome {
        let mut state = self.state.lock().await;
        let mut command = self.classifier.classify(text, &state.context());
        info!(
            intent = ?command.intent,
            confidence = command.confidence,
            "Dispatching voice command"
        );

        let search = match (&command.intent, &command.parameters) {
            (Intent::Search, CommandParams::Search(query)) => Some(query.clone()),
            _ => None,
        };

        let mut follow_up = None;
        let mut current = true;
        if let Some(query) = search {
            self.speech.speak(&command.response);
            let generation = state.begin_search(query.clone());
            drop(state);

            let result = self.pipeline.search(&query).await;

            state = self.state.lock().await;
            follow_up = commit_search(&mut state, generation, result);
            current = follow_up.is_some();
        } else {
            let effect = match command.parameters {
                CommandParams::Navigate { direction } => Some(state.step(direction)),
                _ if command.intent == Intent::Save => Some(state.save_current()),
                _ => None,
            };
            match effect {
                Some(Effect::Moved(job, direction)) => follow_up = Some(moved_text(&job, direction)),
                Some(Effect::AlreadySaved) => command.response = ALREADY_SAVED.to_string(),
                _ => {}
            }
            self.speech.speak(&command.response);
        }

        if let Some(text) = &follow_up {
            self.speech.speak(text);
        }
        // A superseded search must not overwrite what the newer one reported.
        if current {
            state.record(&command, follow_up.as_deref());
        }

        DispatchOutcome {
            command,
            follow_up,
            session: state.snapshot(),
        }
    }

    /// Applies a gesture. Returns `None` when the cooldown suppressed it.
    pub async fn dispatch_gesture(&self, gesture: Gesture) -> Option<DispatchOutcome> {
        let mut state = self.state.lock().await;
        if !state.accept_gesture(gesture, Instant::now()) {
            debug!(gesture = gesture.label(), "Gesture suppressed by cooldown");
            return None;
        }

        let intent = gesture.intent();
        let mut command = match intent {
            Intent::Save => self.classifier.save_command(gesture.label(), &state.context()),
            _ => self
                .classifier
                .navigate_command(Direction::Next, gesture.label(), &state.context()),
        };

        command.response = if !state.has_jobs() {
            NO_JOBS_FOR_GESTURES.to_string()
        } else {
            let effect = match intent {
                Intent::Save => state.save_current(),
                _ => state.step(Direction::Next),
            };
            gesture_text(effect)
        };
        info!(gesture = gesture.label(), intent = ?intent, "Dispatching gesture");
        self.speech.speak(&command.response);
        state.record(&command, None);

        Some(DispatchOutcome {
            command,
            follow_up: None,
            session: state.snapshot(),
        })
    }

    /// Feeds a speech-to-text segment. A final segment schedules the utterance
    /// to be dispatched once the silence window passes without more speech.
    pub async fn push_transcript(self: &Arc<Self>, segment: TranscriptSegment) -> TranscriptAck {
        let mut state = self.state.lock().await;
        let deadline = state.transcript_mut().push(segment, Instant::now());
        let heard = state.transcript_mut().current();
        drop(state);

        if let Some(deadline) = deadline {
            let dispatcher = Arc::clone(self);
            tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                dispatcher.complete_utterance().await;
            });
        }

        TranscriptAck {
            heard,
            pending: deadline.is_some(),
        }
    }

    /// Dispatches the buffered utterance if the silence window has elapsed.
    pub async fn complete_utterance(&self) -> Option<DispatchOutcome> {
        let ready = self
            .state
            .lock()
            .await
            .transcript_mut()
            .take_ready(Instant::now());
        match ready {
            Some(text) => Some(self.dispatch_utterance(&text).await),
            None => None,
        }
    }
}

fn commit_search(state: &mut SessionState, generation: u64, result: SearchResult) -> Option<String> {
    let text = match result.jobs.first() {
        Some(first) => format!(
            "Found {} jobs. Let me tell you about the first one: {}",
            result.jobs.len(),
            job_summary(first)
        ),
        None => NO_RESULTS.to_string(),
    };

    if state.finish_search(generation, result) {
        Some(text)
    } else {
        warn!(
            generation,
            current = state.generation(),
            "Discarding stale search result"
        );
        None
    }
}

fn moved_text(job: &JobPosting, direction: Direction) -> String {
    let verb = match direction {
        Direction::Next => "next",
        Direction::Previous => "previous",
    };
    format!("Moving to {verb} job: {}", job_summary(job))
}

fn gesture_text(effect: Effect) -> String {
    match effect {
        Effect::Moved(job, direction) => moved_text(&job, direction),
        Effect::Boundary(_) => "You have reached the end of the job list.".to_string(),
        Effect::Saved(job) => format!("Job saved: {} at {}", job.title, job.company),
        Effect::AlreadySaved => ALREADY_SAVED.to_string(),
        Effect::NothingSelected => NO_JOBS_FOR_GESTURES.to_string(),
    }
}
