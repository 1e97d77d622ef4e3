use super::Gateway;
use babel_core::{error::BabelError, languages::CANONICAL_LANGUAGE};
use tracing::debug;

impl Gateway {
    /// Preferred language code for a user.
    ///
    /// Missing records, records without a language, and blank languages all
    /// resolve to the canonical language. Store read failures propagate.
    pub async fn resolve(&self, user_id: &str) -> Result<String, BabelError> {
        let record = self.store.get(user_id).await?;
        debug!("[resolver] Preference record for user {user_id}: {record:?}");

        Ok(record
            .and_then(|r| r.pref_lang)
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| CANONICAL_LANGUAGE.to_string()))
    }
}
