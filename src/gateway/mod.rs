//! Translation decision service.
//!
//! - `preference`: preferred language lookup with canonical fallback
//! - `pipeline`: switch interception, direction choice, translator call

mod pipeline;
mod preference;


use babel_core::{
    config::TranslationConfig,
    traits::{PreferenceStore, Translator},
};
use std::sync::Arc;

/// Composes the interceptor, resolver, and dispatcher around injected
/// store and translator handles. Cheap to clone.
#[derive(Clone)]
pub struct Gateway {
    store: Arc<dyn PreferenceStore>,
    translator: Arc<dyn Translator>,
    degrade_on_error: bool,
}

impl Gateway {
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        translator: Arc<dyn Translator>,
        config: &TranslationConfig,
    ) -> Self {
        Self {
            store,
            translator,
            degrade_on_error: config.degrade_on_error,
        }
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    pub fn translator_name(&self) -> &str {
        self.translator.name()
    }

    pub async fn translator_available(&self) -> bool {
        self.translator.is_available().await
    }
}
