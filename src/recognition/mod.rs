// recognition/mod.rs
// Recognition engine contract and typed event stream

mod types;

pub use types::{RecognitionError, RecognitionEvent, RecognitionResult};

use tokio::sync::mpsc::UnboundedReceiver;

/// Fixed engine configuration: continuous capture with interim results in a
/// single source language.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

/// Everything an engine can deliver while a session is live.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A batch of interim/final results
    Result(RecognitionEvent),
    /// Raw engine error code, mapped by the consumer
    Error(String),
    /// The engine stopped producing results
    End,
}

/// Contract for the external recognition capability.
///
/// Events are delivered through a channel rather than host callbacks, which
/// keeps delivery single-threaded and in order: the consumer drains the
/// receiver and must finish each event before taking the next.
pub trait RecognitionEngine: Send {
    /// Begin a continuous recognition session and hand back its event stream.
    fn start(&mut self, config: &EngineConfig) -> Result<UnboundedReceiver<EngineEvent>, RecognitionError>;

    /// End the session. The engine emits `EngineEvent::End` when it winds down.
    fn stop(&mut self);
}
