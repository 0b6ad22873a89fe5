//! Settings Models
//!
//! Application configuration data structures, stored in `config.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote analysis service settings
    #[serde(default)]
    pub api: ApiSettings,
    /// Prefer the LLM-based topic-similarity endpoint over the
    /// topic-model-based one
    #[serde(default)]
    pub prefer_llm_topic_model: bool,
}

/// Connection settings for the remote analysis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    arg_lens_api::DEFAULT_TIMEOUT_SECS
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err("api.timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}
