// translate/relay.rs
// Per-chunk translation tasks feeding a completion-order accumulator

use super::TranslationService;
use crate::config::{DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Relays sealed transcript chunks to the translation chain.
///
/// Each chunk gets its own task; calls are never queued against each other.
/// The accumulator is appended when a call resolves, so concatenation order
/// is completion order, not submission order. In-flight calls keep running
/// (and still append) after the recognition session stops.
pub struct TranslationRelay {
    service: Arc<TranslationService>,
    accumulated: Arc<Mutex<String>>,
}

impl TranslationRelay {
    pub fn new(service: Arc<TranslationService>) -> Self {
        Self {
            service,
            accumulated: Arc::new(Mutex::new(String::new())),
        }
    }

    /// Spawn an independent translation call for one sealed chunk. The
    /// returned handle is only needed by callers that must await completion.
    pub fn submit(&self, chunk: String) -> JoinHandle<()> {
        let service = self.service.clone();
        let accumulated = self.accumulated.clone();

        tokio::spawn(async move {
            let translated = service
                .translate(&chunk, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG)
                .await;

            if translated.is_empty() {
                return;
            }

            if let Ok(mut acc) = accumulated.lock() {
                if !acc.is_empty() {
                    acc.push(' ');
                }
                acc.push_str(&translated);
                tracing::debug!(
                    "Relay: appended {} chars, accumulated {}",
                    translated.len(),
                    acc.len()
                );
            }
        })
    }

    /// Drain the sealed-chunk stream, spawning a call per chunk. Runs until
    /// the sender side is dropped.
    pub async fn drive(&self, mut chunks: UnboundedReceiver<String>) {
        while let Some(chunk) = chunks.recv().await {
            self.submit(chunk);
        }
    }

    pub fn accumulated(&self) -> String {
        self.accumulated
            .lock()
            .map(|acc| acc.clone())
            .unwrap_or_default()
    }

    /// Empty the accumulator. Deliberately separate from the transcript's
    /// `clear`; the two displays are reset independently.
    pub fn clear(&self) {
        if let Ok(mut acc) = self.accumulated.lock() {
            acc.clear();
        }
    }
}
