use std::env;

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "vi";
pub const DEFAULT_AZURE_REGION: &str = "eastasia";
pub const DEFAULT_PORT: u16 = 3000;

/// Per-provider call timeout, enforced at the chain level.
pub const PROVIDER_TIMEOUT_SECS: u64 = 5;
/// Hard cap on translation input accepted at the HTTP boundary.
pub const MAX_INPUT_CHARS: usize = 2000;

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub azure_key: Option<String>,
    pub azure_region: String,
    pub libre_api_key: Option<String>,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        let azure_key = env::var("AZURE_TRANSLATOR_KEY").ok().and_then(non_empty);
        let azure_region = env::var("AZURE_TRANSLATOR_REGION")
            .ok()
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_AZURE_REGION.to_string());
        let libre_api_key = env::var("LIBRETRANSLATE_API_KEY").ok().and_then(non_empty);
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            azure_key,
            azure_region,
            libre_api_key,
            port,
        }
    }

    /// Which provider the health probe reports as the configured primary.
    pub fn service_name(&self) -> &'static str {
        if self.azure_key.is_some() {
            "azure"
        } else {
            "libretranslate"
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
