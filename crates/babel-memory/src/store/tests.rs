use super::SqliteStore;
use babel_core::config::StoreConfig;
use babel_core::error::BabelError;
use babel_core::traits::PreferenceStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Create an in-memory store for testing.
async fn test_store() -> SqliteStore {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .unwrap();
    SqliteStore::run_migrations(&pool).await.unwrap();
    SqliteStore { pool }
}

#[tokio::test]
async fn test_get_missing_user_returns_none() {
    let store = test_store().await;
    assert!(store.get("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_put_then_get() {
    let store = test_store().await;
    store.put("u1", "es").await.unwrap();
    let pref = store.get("u1").await.unwrap().unwrap();
    assert_eq!(pref.user_id, "u1");
    assert_eq!(pref.pref_lang.as_deref(), Some("es"));
}

#[tokio::test]
async fn test_put_overwrites() {
    let store = test_store().await;
    store.put("u1", "es").await.unwrap();
    store.put("u1", "fr").await.unwrap();
    let pref = store.get("u1").await.unwrap().unwrap();
    assert_eq!(pref.pref_lang.as_deref(), Some("fr"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM language_preferences")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 1, "upsert must not duplicate rows");
}

#[tokio::test]
async fn test_users_are_independent() {
    let store = test_store().await;
    store.put("u1", "de").await.unwrap();
    store.put("u2", "ja").await.unwrap();
    assert_eq!(
        store.get("u1").await.unwrap().unwrap().pref_lang.as_deref(),
        Some("de")
    );
    assert_eq!(
        store.get("u2").await.unwrap().unwrap().pref_lang.as_deref(),
        Some("ja")
    );
}

#[tokio::test]
async fn test_record_without_pref_lang() {
    let store = test_store().await;
    sqlx::query("INSERT INTO language_preferences (user_id) VALUES (?)")
        .bind("u1")
        .execute(store.pool())
        .await
        .unwrap();
    let pref = store.get("u1").await.unwrap().unwrap();
    assert!(pref.pref_lang.is_none());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let store = test_store().await;
    store.put("u1", "it").await.unwrap();
    SqliteStore::run_migrations(store.pool()).await.unwrap();
    assert_eq!(
        store.get("u1").await.unwrap().unwrap().pref_lang.as_deref(),
        Some("it")
    );
}

#[tokio::test]
async fn test_new_creates_db_file() {
    let dir = std::env::temp_dir().join(format!("__babel_store_test_{}__", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let db_path = dir.join("data/prefs.db");
    let config = StoreConfig {
        backend: "sqlite".to_string(),
        db_path: db_path.to_string_lossy().to_string(),
    };

    let store = SqliteStore::new(&config).await.unwrap();
    store.put("u1", "pt").await.unwrap();
    assert!(db_path.exists());
    assert_eq!(store.name(), "sqlite");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_new_fails_when_data_dir_is_a_file() {
    let blocker = std::env::temp_dir().join(format!("__babel_store_blocker_{}__", std::process::id()));
    std::fs::write(&blocker, b"not a directory").unwrap();
    let config = StoreConfig {
        backend: "sqlite".to_string(),
        db_path: blocker.join("data/prefs.db").to_string_lossy().to_string(),
    };

    let err = SqliteStore::new(&config).await.err().unwrap();
    assert!(matches!(err, BabelError::Io(_)), "got: {err}");

    let _ = std::fs::remove_file(&blocker);
}
