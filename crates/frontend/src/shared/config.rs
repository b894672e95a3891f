//! Runtime configuration of the admin UI.
//!
//! Defaults can be overridden by a JSON object stored under
//! [`CONFIG_STORAGE_KEY`] in `localStorage`; unknown fields are ignored and
//! missing ones fall back to the defaults.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::storage;

pub const CONFIG_STORAGE_KEY: &str = "cms_admin_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated latency of store operations, ms
    pub latency_ms: u32,
    /// Simulated latency of the auto-translate stub, ms
    pub translation_latency_ms: u32,
    /// Locale whose title is required on content forms
    pub default_locale: String,
    /// Locales offered in content forms
    pub supported_locales: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            translation_latency_ms: 800,
            default_locale: "en".to_string(),
            supported_locales: contracts::shared::translation::supported_locales()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let config = storage::load_json::<AppConfig>(CONFIG_STORAGE_KEY)
            .map(AppConfig::sanitized)
            .unwrap_or_default();
        log::debug!("Loaded config: {:?}", config);
        config
    }

    /// The default locale is always offered and listed first
    fn sanitized(mut self) -> Self {
        if self.default_locale.trim().is_empty() {
            self.default_locale = "en".to_string();
        }
        self.supported_locales.retain(|l| l != &self.default_locale);
        self.supported_locales.insert(0, self.default_locale.clone());
        self
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
