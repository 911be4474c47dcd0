//! Per-session mutable state: the current result list, selection, saved jobs,
//! and the search generation guarding against stale results.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::models::{JobPosting, SearchQuery};
use crate::search::SearchResult;
use crate::session::saved::SavedJobs;
use crate::voice::{
    CommandContext, Direction, Gesture, GestureGate, TranscriptAssembler, VoiceCommand,
};

/// idle → searching on a search; searching → browsing when the newest search
/// completes; browsing → searching on the next search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Searching,
    Browsing,
}

/// What a navigate or save did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Moved(JobPosting, Direction),
    Boundary(Direction),
    Saved(JobPosting),
    AlreadySaved,
    NothingSelected,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub current_index: usize,
    pub current_job: Option<JobPosting>,
    pub job_count: usize,
    pub saved_count: usize,
    pub search_generation: u64,
    pub last_result: Option<SearchResult>,
    /// The most recently applied command, including silence-committed ones.
    pub last_command: Option<VoiceCommand>,
    pub last_follow_up: Option<String>,
}

#[derive(Debug)]
pub struct SessionState {
    phase: SessionPhase,
    jobs: Vec<JobPosting>,
    index: usize,
    saved: SavedJobs,
    generation: u64,
    last_query: Option<SearchQuery>,
    last_result: Option<SearchResult>,
    last_command: Option<VoiceCommand>,
    last_follow_up: Option<String>,
    gestures: GestureGate,
    transcript: TranscriptAssembler,
}

impl SessionState {
    pub fn new(silence: Duration) -> Self {
        Self {
            phase: SessionPhase::Idle,
            jobs: Vec::new(),
            index: 0,
            saved: SavedJobs::default(),
            generation: 0,
            last_query: None,
            last_result: None,
            last_command: None,
            last_follow_up: None,
            gestures: GestureGate::default(),
            transcript: TranscriptAssembler::new(silence),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_jobs(&self) -> bool {
        !self.jobs.is_empty()
    }

    pub fn current_job(&self) -> Option<&JobPosting> {
        self.jobs.get(self.index)
    }

    pub fn context(&self) -> CommandContext<'_> {
        CommandContext {
            jobs: &self.jobs,
            index: self.index,
            search_active: self.phase == SessionPhase::Searching,
            last_query: self.last_query.as_ref(),
        }
    }

    /// Starts a search and returns its generation. Any search still in flight
    /// becomes stale.
    pub fn begin_search(&mut self, query: SearchQuery) -> u64 {
        self.generation += 1;
        self.phase = SessionPhase::Searching;
        self.last_query = Some(query);
        self.generation
    }

    /// Commits a result only if it belongs to the newest search.
    pub fn finish_search(&mut self, generation: u64, result: SearchResult) -> bool {
        if generation != self.generation {
            return false;
        }
        self.jobs = result.jobs.clone();
        self.index = 0;
        self.last_result = Some(result);
        self.phase = SessionPhase::Browsing;
        true
    }

    /// Moves the selection one step; never wraps.
    pub fn step(&mut self, direction: Direction) -> Effect {
        if self.jobs.is_empty() {
            return Effect::NothingSelected;
        }
        let target = match direction {
            Direction::Next if self.index + 1 < self.jobs.len() => self.index + 1,
            Direction::Previous if self.index > 0 => self.index - 1,
            _ => return Effect::Boundary(direction),
        };
        self.index = target;
        Effect::Moved(self.jobs[target].clone(), direction)
    }

    pub fn save_current(&mut self) -> Effect {
        let Some(job) = self.current_job().cloned() else {
            return Effect::NothingSelected;
        };
        if self.saved.insert(job.clone()) {
            Effect::Saved(job)
        } else {
            Effect::AlreadySaved
        }
    }

    /// Keeps what was said back to the user so clients that did not issue the
    /// command (transcript path) can read it from the snapshot.
    pub fn record(&mut self, command: &VoiceCommand, follow_up: Option<&str>) {
        self.last_command = Some(command.clone());
        self.last_follow_up = follow_up.map(str::to_string);
    }

    pub fn saved(&self) -> &SavedJobs {
        &self.saved
    }

    pub fn saved_mut(&mut self) -> &mut SavedJobs {
        &mut self.saved
    }

    pub fn accept_gesture(&mut self, gesture: Gesture, now: Instant) -> bool {
        self.gestures.try_accept(gesture, now)
    }

    pub fn transcript_mut(&mut self) -> &mut TranscriptAssembler {
        &mut self.transcript
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            current_index: self.index,
            current_job: self.current_job().cloned(),
            job_count: self.jobs.len(),
            saved_count: self.saved.len(),
            search_generation: self.generation,
            last_result: self.last_result.clone(),
            last_command: self.last_command.clone(),
            last_follow_up: self.last_follow_up.clone(),
        }
    }
}
