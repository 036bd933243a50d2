pub mod config;
pub mod recognition;
pub mod server;
pub mod transcript;
pub mod translate;

pub use config::Settings;
pub use recognition::{EngineConfig, EngineEvent, RecognitionEngine, RecognitionError};
pub use transcript::{StartError, TranscriptController, TranscriptState};
pub use translate::{TranslateAdapter, TranslationRelay, TranslationService};
