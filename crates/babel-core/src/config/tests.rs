use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.babel.log_level, "info");
    assert_eq!(cfg.store.backend, "sqlite");
    assert_eq!(cfg.store.db_path, "~/.babel/data/preferences.db");
    assert_eq!(cfg.translator.default, "aws");
    assert_eq!(cfg.translator.timeout_secs, 30);
    assert!(cfg.translator.aws.is_none());
    assert!(!cfg.translation.degrade_on_error);
    assert_eq!(cfg.api.port, 3400);
    assert!(cfg.api.api_key.is_empty());
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        [babel]
        log_level = "debug"

        [store]
        backend = "memory"

        [translator]
        default = "libretranslate"
        timeout_secs = 5

        [translator.libretranslate]
        base_url = "https://lt.example.com"
        api_key = "lt-key"

        [translation]
        degrade_on_error = true

        [api]
        host = "0.0.0.0"
        port = 8080
        api_key = "secret"
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.babel.log_level, "debug");
    assert_eq!(cfg.babel.data_dir, "~/.babel");
    assert_eq!(cfg.store.backend, "memory");
    assert_eq!(cfg.translator.default, "libretranslate");
    assert_eq!(cfg.translator.timeout_secs, 5);
    let lt = cfg.translator.libretranslate.unwrap();
    assert_eq!(lt.base_url, "https://lt.example.com");
    assert_eq!(lt.api_key, "lt-key");
    assert!(cfg.translation.degrade_on_error);
    assert_eq!(cfg.api.host, "0.0.0.0");
    assert_eq!(cfg.api.port, 8080);
    assert_eq!(cfg.api.api_key, "secret");
}

#[test]
fn test_aws_config_defaults_when_section_sparse() {
    let toml_str = r#"
        [translator.aws]
        access_key_id = "AKIDEXAMPLE"
    "#;
    let cfg = parse(toml_str).unwrap();
    let aws = cfg.translator.aws.unwrap();
    assert!(aws.region.is_empty(), "region is left to AWS_REGION");
    assert_eq!(aws.access_key_id, "AKIDEXAMPLE");
    assert!(aws.secret_access_key.is_empty());
    assert!(aws.session_token.is_none());
    assert!(aws.endpoint.is_none());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = parse("[store\nbackend = 1").unwrap_err();
    assert!(matches!(err, BabelError::Config(_)));
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let cfg = load("/nonexistent/__babel_config__.toml").unwrap();
    assert_eq!(cfg.translator.default, "aws");
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__babel_test_load_config__.toml");
    std::fs::write(&tmp, "[store]\nbackend = \"memory\"\n").unwrap();
    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.store.backend, "memory");
    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_shellexpand_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let expanded = shellexpand("~/.babel/data");
        assert_eq!(expanded, format!("{}/.babel/data", home.to_string_lossy()));
    }
    assert_eq!(shellexpand("/abs/path"), "/abs/path");
    assert_eq!(shellexpand("~user/x"), "~user/x");
}
