//! Default value functions used by serde for config deserialization.

pub fn default_data_dir() -> String {
    "~/.babel".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_store_backend() -> String {
    "sqlite".to_string()
}

pub fn default_db_path() -> String {
    "~/.babel/data/preferences.db".to_string()
}

pub fn default_translator() -> String {
    "aws".to_string()
}

pub fn default_libretranslate_url() -> String {
    "http://localhost:5000".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_api_port() -> u16 {
    3400
}
