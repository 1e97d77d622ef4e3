//! `PreferenceStore` over the `language_preferences` table.

use super::SqliteStore;
use async_trait::async_trait;
use babel_core::{error::BabelError, message::LanguagePreference, traits::PreferenceStore};
use tracing::debug;

#[async_trait]
impl PreferenceStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get(&self, user_id: &str) -> Result<Option<LanguagePreference>, BabelError> {
        let row: Option<(String, Option<String>)> = sqlx::query_as(
            "SELECT user_id, pref_lang FROM language_preferences WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BabelError::Store(format!("query failed: {e}")))?;

        debug!("[store] get_item for user: {user_id} returned {row:?}");

        Ok(row.map(|(user_id, pref_lang)| LanguagePreference { user_id, pref_lang }))
    }

    async fn put(&self, user_id: &str, pref_lang: &str) -> Result<(), BabelError> {
        sqlx::query(
            "INSERT INTO language_preferences (user_id, pref_lang) VALUES (?, ?) \
             ON CONFLICT(user_id) DO UPDATE SET pref_lang = excluded.pref_lang, updated_at = datetime('now')",
        )
        .bind(user_id)
        .bind(pref_lang)
        .execute(&self.pool)
        .await
        .map_err(|e| BabelError::Store(format!("upsert preference failed: {e}")))?;

        Ok(())
    }
}
