// recognition/types.rs
// Recognition event wire model and error taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single hypothesis from the recognition engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Recognized text for this result slot
    pub transcript: String,
    /// Final results are sealed; interim results may still be revised
    pub is_final: bool,
}

/// One batch of results delivered by the engine.
///
/// The engine may redeliver or replace results at and after `result_index`,
/// so consumers must start processing at that index. Events arrive in
/// non-decreasing `result_index` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionEvent {
    pub result_index: usize,
    pub results: Vec<RecognitionResult>,
}

/// Recognition errors, mapped from raw engine codes.
///
/// All of these end the current session. None are auto-retried; the caller
/// must restart listening explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("Speech recognition is not supported on this platform")]
    UnsupportedPlatform,

    #[error("Microphone access denied")]
    PermissionDenied,

    #[error("No speech detected")]
    NoSpeechDetected,

    #[error("Microphone not found")]
    DeviceUnavailable,

    #[error("Network error during recognition")]
    TransportError,

    #[error("Recognition error: {0}")]
    Unknown(String),
}

impl RecognitionError {
    /// Map a raw engine error code to the taxonomy.
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" => RecognitionError::PermissionDenied,
            "no-speech" => RecognitionError::NoSpeechDetected,
            "audio-capture" => RecognitionError::DeviceUnavailable,
            "network" => RecognitionError::TransportError,
            other => RecognitionError::Unknown(other.to_string()),
        }
    }

    /// Returns true when the user can recover by restarting the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RecognitionError::UnsupportedPlatform)
    }
}
