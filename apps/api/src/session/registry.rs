use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::search::SearchPipeline;
use crate::session::dispatcher::CommandDispatcher;
use crate::session::state::SessionState;
use crate::voice::{IntentClassifier, SpeechOutput};

/// Live sessions keyed by id. Every session shares the same classifier,
/// pipeline and speech output and owns its own state.
pub struct SessionRegistry {
    classifier: Arc<IntentClassifier>,
    pipeline: Arc<SearchPipeline>,
    speech: Arc<dyn SpeechOutput>,
    silence: Duration,
    sessions: RwLock<HashMap<Uuid, Arc<CommandDispatcher>>>,
}

impl SessionRegistry {
    pub fn new(
        classifier: Arc<IntentClassifier>,
        pipeline: Arc<SearchPipeline>,
        speech: Arc<dyn SpeechOutput>,
        silence: Duration,
    ) -> Self {
        Self {
            classifier,
            pipeline,
            speech,
            silence,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> (Uuid, Arc<CommandDispatcher>) {
        let id = Uuid::new_v4();
        let dispatcher = Arc::new(CommandDispatcher::new(
            self.classifier.clone(),
            self.pipeline.clone(),
            self.speech.clone(),
            SessionState::new(self.silence),
        ));
        self.sessions.write().await.insert(id, dispatcher.clone());
        info!(session_id = %id, "Session created");
        (id, dispatcher)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<CommandDispatcher>> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn remove(&self, id: Uuid) -> Option<Arc<CommandDispatcher>> {
        let removed = self.sessions.write().await.remove(&id);
        if removed.is_some() {
            info!(session_id = %id, "Session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
