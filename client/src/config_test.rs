use super::*;

#[test]
fn default_points_at_local_api() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(config.spaces_url(), "http://localhost:6656/apiv1/spaces/");
}

#[test]
fn new_appends_missing_trailing_slash() {
    let config = ApiConfig::new("https://api.example.test").unwrap();
    assert_eq!(config.base_url(), "https://api.example.test/");
    assert_eq!(config.spaces_url(), "https://api.example.test/apiv1/spaces/");
}

#[test]
fn new_collapses_repeated_trailing_slashes() {
    let config = ApiConfig::new("  http://10.0.0.5:6656/// ").unwrap();
    assert_eq!(config.base_url(), "http://10.0.0.5:6656/");
}

#[test]
fn new_keeps_base_path_prefix() {
    let config = ApiConfig::new("https://example.test/backend/").unwrap();
    assert_eq!(config.spaces_url(), "https://example.test/backend/apiv1/spaces/");
}

#[test]
fn new_rejects_blank_value() {
    assert_eq!(ApiConfig::new("   "), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn new_rejects_missing_scheme() {
    assert_eq!(
        ApiConfig::new("undefined"),
        Err(ConfigError::UnsupportedScheme("undefined".to_owned()))
    );
    assert!(ApiConfig::new("ftp://files.example.test/").is_err());
}

#[test]
fn from_optional_falls_back_to_default() {
    assert_eq!(ApiConfig::from_optional(None), Ok(ApiConfig::default()));
    assert_eq!(
        ApiConfig::from_optional(Some("http://spaces.internal:8080")).unwrap().base_url(),
        "http://spaces.internal:8080/"
    );
}

#[test]
fn join_url_inserts_exactly_one_slash() {
    assert_eq!(join_url("http://a", "b/"), "http://a/b/");
    assert_eq!(join_url("http://a/", "b/"), "http://a/b/");
    assert_eq!(join_url("http://a/", "/b/"), "http://a/b/");
}

#[test]
fn config_error_messages_are_readable() {
    assert_eq!(ConfigError::EmptyBaseUrl.to_string(), "base URL is empty");
    assert_eq!(
        ConfigError::UnsupportedScheme("x".into()).to_string(),
        "base URL must start with http:// or https://: x"
    );
}

#[test]
fn new_rejects_hostless_url() {
    assert_eq!(ApiConfig::new("http://"), Err(ConfigError::MissingHost("http://".to_owned())));
    assert_eq!(ApiConfig::new(" https:/// "), Err(ConfigError::MissingHost("https:///".to_owned())));
    assert!(ApiConfig::new("http:///apiv1").is_err());
}
