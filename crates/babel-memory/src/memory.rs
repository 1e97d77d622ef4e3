//! In-process preference store.

use async_trait::async_trait;
use babel_core::{error::BabelError, message::LanguagePreference, traits::PreferenceStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Preference store backed by a `HashMap`. Contents die with the process.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, LanguagePreference>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw record, bypassing `put`. Lets callers seed records
    /// that have no `pref_lang`.
    pub async fn insert(&self, record: LanguagePreference) {
        self.records
            .write()
            .await
            .insert(record.user_id.clone(), record);
    }
}

#[async_trait]
impl PreferenceStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, user_id: &str) -> Result<Option<LanguagePreference>, BabelError> {
        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn put(&self, user_id: &str, pref_lang: &str) -> Result<(), BabelError> {
        self.records.write().await.insert(
            user_id.to_string(),
            LanguagePreference {
                user_id: user_id.to_string(),
                pref_lang: Some(pref_lang.to_string()),
            },
        );
        Ok(())
    }
}
