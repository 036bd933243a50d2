// translate/azure.rs
// Azure Translator adapter (primary, subscription key + region)

use super::{TranslateAdapter, TranslateError};
use crate::config::PROVIDER_TIMEOUT_SECS;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const AZURE_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
const API_VERSION: &str = "3.0";

#[derive(Serialize)]
struct AzureText {
    #[serde(rename = "Text")]
    text: String,
}

#[derive(Deserialize)]
struct AzureResult {
    translations: Vec<AzureTranslation>,
}

#[derive(Deserialize)]
struct AzureTranslation {
    text: String,
}

pub struct AzureAdapter {
    client: Client,
    api_key: String,
    region: String,
}

impl AzureAdapter {
    pub fn new(api_key: String, region: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        tracing::info!("Azure Translator adapter initialized (region {})", region);

        Self {
            client,
            api_key,
            region,
        }
    }
}

#[async_trait]
impl TranslateAdapter for AzureAdapter {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let url = format!(
            "{}/translate?api-version={}&from={}&to={}",
            AZURE_ENDPOINT, API_VERSION, source, target
        );

        let body = vec![AzureText {
            text: text.to_string(),
        }];

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .json(&body)
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
                    TranslateError::ProviderError(format!("Azure {}: {}", status, detail))
                }
            });
        }

        let results: Vec<AzureResult> = response
            .json()
            .await
            .map_err(|e| TranslateError::ProviderError(format!("Azure parse: {}", e)))?;

        results
            .first()
            .and_then(|r| r.translations.first())
            .map(|t| t.text.clone())
            .ok_or(TranslateError::InvalidResponse)
    }

    fn name(&self) -> &str {
        "azure"
    }
}
