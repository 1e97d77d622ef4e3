use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Translator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Which backend to use: `aws` or `libretranslate`.
    #[serde(default = "default_translator")]
    pub default: String,
    /// Per-request timeout for backend calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub aws: Option<AwsTranslateConfig>,
    #[serde(default)]
    pub libretranslate: Option<LibreTranslateConfig>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            default: default_translator(),
            timeout_secs: default_timeout_secs(),
            aws: None,
            libretranslate: None,
        }
    }
}

/// Amazon Translate config.
///
/// Empty credentials and region are filled from the standard `AWS_*`
/// environment variables when the translator is built; the region then
/// falls back to us-east-1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsTranslateConfig {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub secret_access_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
    /// Override the regional endpoint (e.g. a local mock).
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for AwsTranslateConfig {
    fn default() -> Self {
        Self {
            region: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            session_token: None,
            endpoint: None,
        }
    }
}

/// LibreTranslate config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreTranslateConfig {
    #[serde(default = "default_libretranslate_url")]
    pub base_url: String,
    /// Only required by instances that enforce keys.
    #[serde(default)]
    pub api_key: String,
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_libretranslate_url(),
            api_key: String::new(),
        }
    }
}
