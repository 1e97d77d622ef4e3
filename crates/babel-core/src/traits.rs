use crate::{
    error::BabelError,
    message::{LanguagePreference, TranslateOutput},
};
use async_trait::async_trait;

/// Key-value store of per-user language preferences.
///
/// Single-item semantics: no transactions, last write wins.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Fetch the preference record for a user, if one exists.
    async fn get(&self, user_id: &str) -> Result<Option<LanguagePreference>, BabelError>;

    /// Create or overwrite the preference record for a user.
    async fn put(&self, user_id: &str, pref_lang: &str) -> Result<(), BabelError>;
}

/// Text translation backend.
///
/// Every backend (Amazon Translate, LibreTranslate, ...) implements this
/// trait so the dispatcher can stay backend-agnostic.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Translate `text` from `source_lang` to `target_lang`.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslateOutput, BabelError>;

    /// Check if the backend is configured and reachable.
    async fn is_available(&self) -> bool;
}
