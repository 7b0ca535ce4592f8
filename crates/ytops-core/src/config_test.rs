use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("YOUTUBE_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YOUTUBE_API_KEY"),
        "expected MissingEnvVar(YOUTUBE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("YOUTUBE_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YOUTUBE_API_KEY"),
        "expected MissingEnvVar(YOUTUBE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.youtube_api_key, "test-key");
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "ytops/0.1 (channel-analytics)");
    assert_eq!(cfg.default_max_items, 300);
    assert_eq!(cfg.default_short_threshold_secs, 60);
    assert_eq!(cfg.cache_ttl_secs, 3600);
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = full_env();
    map.insert("YTOPS_API_BASE_URL", "http://127.0.0.1:9999/");
    map.insert("YTOPS_REQUEST_TIMEOUT_SECS", "30");
    map.insert("YTOPS_MAX_ITEMS", "1000");
    map.insert("YTOPS_SHORT_THRESHOLD_SECS", "180");
    map.insert("YTOPS_CACHE_TTL_SECS", "0");
    map.insert("YTOPS_LOG_LEVEL", "ytops_youtube=debug");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:9999/");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.default_max_items, 1000);
    assert_eq!(cfg.default_short_threshold_secs, 180);
    assert_eq!(cfg.cache_ttl_secs, 0);
    assert_eq!(cfg.log_level, "ytops_youtube=debug");
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("YTOPS_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTOPS_REQUEST_TIMEOUT_SECS"
        ),
        "expected InvalidEnvVar(YTOPS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = full_env();
    map.insert("YTOPS_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTOPS_REQUEST_TIMEOUT_SECS"
        ),
        "expected InvalidEnvVar(YTOPS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_max_items_out_of_range() {
    for raw in ["49", "1001"] {
        let mut map = full_env();
        map.insert("YTOPS_MAX_ITEMS", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YTOPS_MAX_ITEMS"
            ),
            "expected InvalidEnvVar(YTOPS_MAX_ITEMS) for {raw}, got: {result:?}"
        );
    }
}

#[test]
fn build_app_config_rejects_short_threshold_out_of_range() {
    for raw in ["14", "181"] {
        let mut map = full_env();
        map.insert("YTOPS_SHORT_THRESHOLD_SECS", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. })
                    if var == "YTOPS_SHORT_THRESHOLD_SECS"
            ),
            "expected InvalidEnvVar(YTOPS_SHORT_THRESHOLD_SECS) for {raw}, got: {result:?}"
        );
    }
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"), "key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
