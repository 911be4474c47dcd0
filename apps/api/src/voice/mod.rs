pub mod gesture;
pub mod handlers;
pub mod intent;
pub mod narrative;
pub mod speech;
pub mod transcript;

pub use gesture::{Gesture, GestureGate};
pub use intent::{CommandContext, CommandParams, Direction, Intent, IntentClassifier, VoiceCommand};
pub use speech::{LoggedSpeech, SpeechOutput, SpeechSettings};
pub use transcript::{TranscriptAssembler, TranscriptSegment};
