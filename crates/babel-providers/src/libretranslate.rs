//! LibreTranslate backend.
//!
//! Works with the public instance and any self-hosted deployment.

use async_trait::async_trait;
use babel_core::{
    config::LibreTranslateConfig, error::BabelError, message::TranslateOutput, traits::Translator,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// LibreTranslate client.
pub struct LibreTranslator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LibreTranslator {
    /// Create from config values.
    pub fn from_config(config: &LibreTranslateConfig, timeout: Duration) -> Result<Self, BabelError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BabelError::Translator(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[async_trait]
impl Translator for LibreTranslator {
    fn name(&self) -> &str {
        "libretranslate"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslateOutput, BabelError> {
        let body = TranslateRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: (!self.api_key.is_empty()).then_some(self.api_key.as_str()),
        };

        let url = format!("{}/translate", self.base_url);
        debug!("libretranslate: POST {url} {source_lang}->{target_lang}");

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BabelError::Translator(format!("libretranslate request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.error)
                .unwrap_or(text);
            return Err(BabelError::Translator(format!(
                "libretranslate returned {status}: {detail}"
            )));
        }

        let parsed: TranslateResponse = resp.json().await.map_err(|e| {
            BabelError::Translator(format!("libretranslate: failed to parse response: {e}"))
        })?;

        Ok(TranslateOutput {
            translated_text: parsed.translated_text,
        })
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/languages", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("libretranslate not available: {e}");
                false
            }
        }
    }
}
