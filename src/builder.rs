//! Backend factory: builds the configured store and translator.

use babel_core::{
    config,
    traits::{PreferenceStore, Translator},
};
use babel_memory::{InMemoryStore, SqliteStore};
use babel_providers::{AwsTranslator, LibreTranslator};
use std::sync::Arc;
use std::time::Duration;

/// Build the configured preference store.
pub async fn build_store(cfg: &config::Config) -> anyhow::Result<Arc<dyn PreferenceStore>> {
    match cfg.store.backend.as_str() {
        "sqlite" => Ok(Arc::new(SqliteStore::new(&cfg.store).await?)),
        "memory" => Ok(Arc::new(InMemoryStore::new())),
        other => anyhow::bail!("unsupported store backend: {other}"),
    }
}

/// Build the configured translator.
///
/// A missing `[translator.<name>]` section means "all defaults", which for
/// Amazon Translate defers credentials to the environment.
pub fn build_translator(cfg: &config::Config) -> anyhow::Result<Arc<dyn Translator>> {
    let timeout = Duration::from_secs(cfg.translator.timeout_secs);
    match cfg.translator.default.as_str() {
        "aws" => {
            let ac = cfg.translator.aws.clone().unwrap_or_default();
            Ok(Arc::new(AwsTranslator::from_config(&ac, timeout)?))
        }
        "libretranslate" => {
            let lc = cfg.translator.libretranslate.clone().unwrap_or_default();
            Ok(Arc::new(LibreTranslator::from_config(&lc, timeout)?))
        }
        other => anyhow::bail!("unsupported translator: {other}"),
    }
}
