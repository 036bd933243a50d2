// translate/mod.rs
// Translation provider trait + sequential fallback chain

mod azure;
mod demo;
mod libre;
pub mod relay;
mod types;

pub use azure::AzureAdapter;
pub use demo::DemoAdapter;
pub use libre::LibreAdapter;
pub use relay::TranslationRelay;
pub use types::TranslateError;

use crate::config::{Settings, PROVIDER_TIMEOUT_SECS};
use async_trait::async_trait;
use std::time::Duration;

/// Unified translation adapter trait
#[async_trait]
pub trait TranslateAdapter: Send + Sync {
    /// Translate `text` from `source` to `target`
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;

    /// Provider name
    fn name(&self) -> &str;
}

/// Ordered provider chain with transparent fall-through.
///
/// Providers are tried in priority order; the first success wins. Every
/// failure — error or timeout — is absorbed and the chain moves on, so
/// `translate` itself never fails. The chain terminates in the offline demo
/// dictionary, which always produces a result.
pub struct TranslationService {
    providers: Vec<Box<dyn TranslateAdapter>>,
    call_timeout: Duration,
}

impl TranslationService {
    pub fn new(providers: Vec<Box<dyn TranslateAdapter>>) -> Self {
        Self {
            providers,
            call_timeout: Duration::from_secs(PROVIDER_TIMEOUT_SECS),
        }
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Build the chain from configuration: Azure when its key is present,
    /// then LibreTranslate (public endpoint), then the demo terminal.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut providers: Vec<Box<dyn TranslateAdapter>> = Vec::new();

        if let Some(key) = &settings.azure_key {
            providers.push(Box::new(AzureAdapter::new(
                key.clone(),
                settings.azure_region.clone(),
            )));
            tracing::info!("Translate: Azure adapter loaded (primary)");
        }

        providers.push(Box::new(LibreAdapter::new(settings.libre_api_key.clone())));
        tracing::info!("Translate: LibreTranslate adapter loaded");

        providers.push(Box::new(DemoAdapter::new()));
        tracing::info!("Translate: demo dictionary loaded (offline fallback)");

        Self::new(providers)
    }

    /// Translate with failover across the chain. Whitespace-only input
    /// short-circuits to an empty string without touching any provider.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        for provider in &self.providers {
            let attempt =
                tokio::time::timeout(self.call_timeout, provider.translate(text, source, target));

            match attempt.await {
                Ok(Ok(translated)) => {
                    tracing::info!(
                        "Translate: '{}' succeeded ({} chars)",
                        provider.name(),
                        translated.len()
                    );
                    return translated;
                }
                Ok(Err(e)) => {
                    tracing::warn!("Translate: '{}' failed: {:?}", provider.name(), e);
                }
                Err(_) => {
                    tracing::warn!(
                        "Translate: '{}' timed out after {:?}",
                        provider.name(),
                        self.call_timeout
                    );
                }
            }
        }

        // Only reachable with an explicitly empty chain; from_settings always
        // terminates in the demo adapter.
        tracing::error!("Translate: chain exhausted, serving demo lookup");
        DemoAdapter::lookup(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeAdapter {
        name: &'static str,
        delay: Duration,
        outcome: Result<&'static str, fn() -> TranslateError>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeAdapter {
        fn ok(name: &'static str, out: &'static str, calls: Arc<AtomicUsize>) -> Box<Self> {
            Box::new(Self {
                name,
                delay: Duration::ZERO,
                outcome: Ok(out),
                calls,
            })
        }

        fn failing(name: &'static str, err: fn() -> TranslateError, calls: Arc<AtomicUsize>) -> Box<Self> {
            Box::new(Self {
                name,
                delay: Duration::ZERO,
                outcome: Err(err),
                calls,
            })
        }

        fn slow(name: &'static str, out: &'static str, delay: Duration, calls: Arc<AtomicUsize>) -> Box<Self> {
            Box::new(Self {
                name,
                delay,
                outcome: Ok(out),
                calls,
            })
        }
    }

    #[async_trait]
    impl TranslateAdapter for FakeAdapter {
        async fn translate(
            &self,
            _text: &str,
            _source: &str,
            _target: &str,
        ) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match &self.outcome {
                Ok(out) => Ok((*out).to_string()),
                Err(make) => Err(make()),
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    #[tokio::test]
    async fn test_empty_input_short_circuits_without_provider_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service =
            TranslationService::new(vec![FakeAdapter::ok("primary", "translated", calls.clone())]);

        assert_eq!(service.translate("", "en", "vi").await, "");
        assert_eq!(service.translate("   \t ", "en", "vi").await, "");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let primary_calls = Arc::new(AtomicUsize::new(0));
        let secondary_calls = Arc::new(AtomicUsize::new(0));
        let service = TranslationService::new(vec![
            FakeAdapter::ok("primary", "từ primary", primary_calls.clone()),
            FakeAdapter::ok("secondary", "từ secondary", secondary_calls.clone()),
        ]);

        assert_eq!(service.translate("hello", "en", "vi").await, "từ primary");
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_falls_through_to_secondary() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = TranslationService::new(vec![
            FakeAdapter::failing(
                "primary",
                || TranslateError::ProviderError("boom".to_string()),
                calls.clone(),
            ),
            FakeAdapter::ok("secondary", "từ secondary", calls.clone()),
        ]);

        assert_eq!(service.translate("hello", "en", "vi").await, "từ secondary");
    }

    #[tokio::test]
    async fn test_primary_timeout_falls_through_to_secondary() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = TranslationService::new(vec![
            FakeAdapter::slow(
                "primary",
                "quá muộn",
                Duration::from_millis(200),
                calls.clone(),
            ),
            FakeAdapter::ok("secondary", "từ secondary", calls.clone()),
        ])
        .with_call_timeout(Duration::from_millis(20));

        assert_eq!(service.translate("hello", "en", "vi").await, "từ secondary");
    }

    #[tokio::test]
    async fn test_exhausted_chain_lands_on_demo() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = TranslationService::new(vec![
            FakeAdapter::failing("primary", || TranslateError::TimeoutError, calls.clone()),
            FakeAdapter::failing(
                "secondary",
                || TranslateError::NetworkError("offline".to_string()),
                calls.clone(),
            ),
            Box::new(DemoAdapter::new()),
        ]);

        assert_eq!(service.translate("hello", "en", "vi").await, "Xin chào");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_credential_free_chain_serves_demo_values() {
        let service = TranslationService::new(vec![Box::new(DemoAdapter::new())]);

        assert_eq!(service.translate("hello", "en", "vi").await, "Xin chào");
        assert_eq!(service.translate("Hello", "en", "vi").await, "Xin chào");

        let passthrough = service.translate("banana", "en", "vi").await;
        assert!(passthrough.contains("banana"));
    }
}
