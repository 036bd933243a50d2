// translate/libre.rs
// LibreTranslate adapter (secondary, public endpoint with optional api key)

use super::{TranslateAdapter, TranslateError};
use crate::config::PROVIDER_TIMEOUT_SECS;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const LIBRE_ENDPOINT: &str = "https://libretranslate.com/translate";

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct LibreAdapter {
    client: Client,
    api_key: Option<String>,
}

impl LibreAdapter {
    /// The public endpoint works without a key; a key raises rate limits.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self { client, api_key }
    }
}

#[async_trait]
impl TranslateAdapter for LibreAdapter {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let request = LibreRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(LIBRE_ENDPOINT)
            .json(&request)
            .send()
            .await
            .map_err(TranslateError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 | 403 => TranslateError::AuthenticationError,
                429 => TranslateError::RateLimitError,
                _ => {
                    let detail = response.text().await.unwrap_or_default();
                    TranslateError::ProviderError(format!("LibreTranslate {}: {}", status, detail))
                }
            });
        }

        let parsed: LibreResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::ProviderError(format!("LibreTranslate parse: {}", e)))?;

        Ok(parsed.translated_text)
    }

    fn name(&self) -> &str {
        "libretranslate"
    }
}
