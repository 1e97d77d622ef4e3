//! Amazon Translate backend.
//!
//! Talks to the `TranslateText` JSON API directly with SigV4-signed
//! requests; no SDK involved.

pub mod sigv4;

use async_trait::async_trait;
use babel_core::{
    config::AwsTranslateConfig, error::BabelError, message::TranslateOutput, traits::Translator,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use sigv4::{Credentials, SigningParams};

const SERVICE: &str = "translate";
const TARGET: &str = "AWSShineFrontendService_20170701.TranslateText";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const FALLBACK_REGION: &str = "us-east-1";

/// Amazon Translate client.
pub struct AwsTranslator {
    client: reqwest::Client,
    endpoint: String,
    host: String,
    region: String,
    credentials: Credentials,
}

impl AwsTranslator {
    /// Create from config, filling missing credentials and region from the
    /// environment.
    pub fn from_config(config: &AwsTranslateConfig, timeout: Duration) -> Result<Self, BabelError> {
        let region = resolve_region(&config.region, std::env::var("AWS_REGION").ok());

        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("https://translate.{region}.amazonaws.com"));
        let url = reqwest::Url::parse(&endpoint)
            .map_err(|e| BabelError::Config(format!("invalid aws endpoint {endpoint}: {e}")))?;
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{h}:{p}"),
            (Some(h), None) => h.to_string(),
            (None, _) => {
                return Err(BabelError::Config(format!(
                    "aws endpoint has no host: {endpoint}"
                )))
            }
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BabelError::Translator(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            host,
            region,
            credentials: Credentials::with_env_fallback(
                &config.access_key_id,
                &config.secret_access_key,
                config.session_token.as_deref(),
            ),
        })
    }
}

/// Configured region first, then `AWS_REGION`, then us-east-1.
fn resolve_region(configured: &str, from_env: Option<String>) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    from_env
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| FALLBACK_REGION.to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TranslateTextRequest<'a> {
    text: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TranslateTextResponse {
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for AwsTranslator {
    fn name(&self) -> &str {
        "aws"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslateOutput, BabelError> {
        if !self.credentials.is_complete() {
            return Err(BabelError::Translator(
                "aws: no credentials configured".to_string(),
            ));
        }

        let payload = serde_json::to_vec(&TranslateTextRequest {
            text,
            source_language_code: source_lang,
            target_language_code: target_lang,
        })?;

        let headers = sigv4::sign(&SigningParams {
            credentials: &self.credentials,
            region: &self.region,
            service: SERVICE,
            host: &self.host,
            target: TARGET,
            content_type: CONTENT_TYPE,
            payload: &payload,
            now: chrono::Utc::now(),
        });

        let url = format!("{}/", self.endpoint);
        debug!("aws: POST {url} {source_lang}->{target_lang}");

        let mut req = self.client.post(&url).body(payload);
        for (name, value) in headers.iter().filter(|(k, _)| k != "host") {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req
            .send()
            .await
            .map_err(|e| BabelError::Translator(format!("aws request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(BabelError::Translator(format!(
                "aws returned {status}: {text}"
            )));
        }

        let parsed: TranslateTextResponse = resp
            .json()
            .await
            .map_err(|e| BabelError::Translator(format!("aws: failed to parse response: {e}")))?;

        Ok(TranslateOutput {
            translated_text: parsed.translated_text,
        })
    }

    async fn is_available(&self) -> bool {
        if !self.credentials.is_complete() {
            warn!("aws: no credentials configured");
            return false;
        }
        true
    }
}
