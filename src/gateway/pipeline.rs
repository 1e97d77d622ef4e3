//! Message processing pipeline: the dispatch flow and its invocation wrapper.

use super::Gateway;
use crate::commands::{self, SwitchAttempt};
use babel_core::{
    error::BabelError,
    languages::CANONICAL_LANGUAGE,
    message::{Source, TranslationRequest, TranslationResult},
};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

impl Gateway {
    /// Handle one inbound event end to end.
    ///
    /// Logs the event and the outcome with its processing time, and wraps the
    /// message in a 200 result. Errors are invocation failures.
    pub async fn invoke(&self, request: &TranslationRequest) -> Result<TranslationResult, BabelError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();
        info!(
            "[{request_id}] Event passing for translation: source={} user_id={} message={:?}",
            request.source, request.user_id, request.message
        );

        let translated = self
            .dispatch(&request.message, &request.user_id, request.source)
            .await
            .inspect_err(|e| warn!("[{request_id}] Translation failed: {e}"))?;

        info!(
            "[{request_id}] Message translated is: {translated:?} ({} ms)",
            start.elapsed().as_millis()
        );
        Ok(TranslationResult::ok(translated))
    }

    /// Decide whether and in which direction to translate, then do it.
    ///
    /// User messages are checked for a switch command first; a handled
    /// switch is echoed back verbatim. A malformed switch is treated as
    /// ordinary content.
    pub async fn dispatch(
        &self,
        message: &str,
        user_id: &str,
        source: Source,
    ) -> Result<String, BabelError> {
        debug!("[dispatcher] Source message is: {message:?}");

        if source == Source::User {
            match commands::intercept(self.store.as_ref(), message, user_id).await {
                SwitchAttempt::SwitchSucceeded(code) => {
                    debug!("[dispatcher] Switch to {code} handled, echoing message");
                    return Ok(message.to_string());
                }
                SwitchAttempt::SwitchMalformed => {
                    debug!("[dispatcher] Malformed switch, continuing as content");
                }
                SwitchAttempt::NotASwitchCommand => {}
            }
        }

        let preferred = self.resolve(user_id).await?;
        debug!("[dispatcher] Preferred language is {preferred}");

        if preferred == CANONICAL_LANGUAGE {
            return Ok(message.to_string());
        }

        let (source_lang, target_lang) = match source {
            Source::User => (preferred.as_str(), CANONICAL_LANGUAGE),
            Source::Agent => (CANONICAL_LANGUAGE, preferred.as_str()),
        };

        match self
            .translator
            .translate(message, source_lang, target_lang)
            .await
        {
            Ok(output) => Ok(output
                .translated_text
                .unwrap_or_else(|| message.to_string())),
            Err(e) if self.degrade_on_error => {
                warn!(
                    "[dispatcher] {} failed {source_lang}->{target_lang}, returning original: {e}",
                    self.translator.name()
                );
                Ok(message.to_string())
            }
            Err(e) => Err(e),
        }
    }
}
