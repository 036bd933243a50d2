// transcript/mod.rs
// Listening session state machine over the recognition event stream

use crate::recognition::{
    EngineConfig, EngineEvent, RecognitionEngine, RecognitionError,
};
use thiserror::Error;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

pub mod aggregator;

pub use aggregator::{Aggregator, TranscriptState};

#[derive(Debug, Error)]
pub enum StartError {
    #[error("Speech recognition is not supported on this platform")]
    Unsupported,

    #[error("A listening session is already active")]
    AlreadyListening,

    #[error("Failed to start recognition: {0}")]
    Engine(#[from] RecognitionError),
}

/// An active recognition session. Exclusive owner of the engine until it
/// ends; at most one exists at a time.
struct ListeningSession {
    id: String,
}

/// Owns the recognition engine and the transcript it produces.
///
/// The controller is driven synchronously: the caller drains the engine's
/// event stream and feeds each event to `handle_event` before taking the
/// next, so there is no concurrent event processing. Sealed final chunks are
/// published on an unbounded channel for the translation relay.
pub struct TranscriptController {
    engine: Option<Box<dyn RecognitionEngine>>,
    config: EngineConfig,
    session: Option<ListeningSession>,
    aggregator: Aggregator,
    last_error: Option<RecognitionError>,
    chunk_tx: UnboundedSender<String>,
}

impl TranscriptController {
    /// `engine: None` models a platform without recognition capability.
    /// Returns the controller together with the sealed-chunk stream.
    pub fn new(
        engine: Option<Box<dyn RecognitionEngine>>,
    ) -> (Self, UnboundedReceiver<String>) {
        let (chunk_tx, chunk_rx) = unbounded_channel();
        let controller = Self {
            engine,
            config: EngineConfig::default(),
            session: None,
            aggregator: Aggregator::new(),
            last_error: None,
            chunk_tx,
        };
        (controller, chunk_rx)
    }

    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.session.is_some()
    }

    pub fn final_text(&self) -> &str {
        self.aggregator.final_text()
    }

    pub fn interim_text(&self) -> &str {
        self.aggregator.interim_text()
    }

    pub fn state(&self) -> &TranscriptState {
        self.aggregator.state()
    }

    pub fn last_error(&self) -> Option<&RecognitionError> {
        self.last_error.as_ref()
    }

    /// Begin listening. Fails when the platform has no recognition capability
    /// or a session is already active; clears any error left by a previous
    /// session. Returns the engine's event stream for the caller to drain.
    pub fn start(&mut self) -> Result<UnboundedReceiver<EngineEvent>, StartError> {
        if self.session.is_some() {
            return Err(StartError::AlreadyListening);
        }

        let engine = self.engine.as_mut().ok_or(StartError::Unsupported)?;

        self.last_error = None;
        let events = engine.start(&self.config)?;

        let id = Uuid::new_v4().to_string();
        tracing::info!("Started listening session: {}", id);
        self.session = Some(ListeningSession { id });

        Ok(events)
    }

    /// End the current session. Calling while idle is a no-op.
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        if let Some(engine) = self.engine.as_mut() {
            engine.stop();
        }
        self.aggregator.clear_interim();

        tracing::info!("Stopped listening session: {}", session.id);
    }

    /// Reset the transcript regardless of session state. The translation
    /// accumulator is deliberately left alone; clearing it is the relay's
    /// own operation.
    pub fn clear(&mut self) {
        self.aggregator.clear();
        self.last_error = None;
    }

    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Result(result) => {
                if let Some(sealed) = self.aggregator.apply_event(&result) {
                    tracing::debug!("Sealed chunk: {} chars", sealed.len());
                    let _ = self.chunk_tx.send(sealed);
                }
            }
            EngineEvent::Error(code) => {
                let error = RecognitionError::from_code(&code);
                tracing::warn!("Recognition error ({}): {}", code, error);
                self.last_error = Some(error);
                if let Some(session) = self.session.take() {
                    tracing::info!("Session {} ended by error", session.id);
                }
            }
            EngineEvent::End => {
                self.aggregator.clear_interim();
                if let Some(session) = self.session.take() {
                    tracing::info!("Session {} ended", session.id);
                }
            }
        }
    }
}
