use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Upload scan bounds, matching the range the dashboard offers.
pub const MAX_ITEMS_RANGE: std::ops::RangeInclusive<usize> = 50..=1000;

/// Shorts threshold bounds in seconds.
pub const SHORT_THRESHOLD_RANGE: std::ops::RangeInclusive<u64> = 15..=180;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    // An empty key is as good as a missing one: every request would 400.
    let youtube_api_key = lookup("YOUTUBE_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))?;

    let api_base_url = or_default("YTOPS_API_BASE_URL", DEFAULT_API_BASE_URL);
    let log_level = or_default("YTOPS_LOG_LEVEL", "warn");
    let user_agent = or_default("YTOPS_USER_AGENT", "ytops/0.1 (channel-analytics)");

    let request_timeout_secs = parse_u64("YTOPS_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTOPS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let default_max_items = parse_usize("YTOPS_MAX_ITEMS", "300")?;
    if !MAX_ITEMS_RANGE.contains(&default_max_items) {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTOPS_MAX_ITEMS".to_string(),
            reason: format!(
                "{default_max_items} is outside {}..={}",
                MAX_ITEMS_RANGE.start(),
                MAX_ITEMS_RANGE.end()
            ),
        });
    }

    let default_short_threshold_secs = parse_u64("YTOPS_SHORT_THRESHOLD_SECS", "60")?;
    if !SHORT_THRESHOLD_RANGE.contains(&default_short_threshold_secs) {
        return Err(ConfigError::InvalidEnvVar {
            var: "YTOPS_SHORT_THRESHOLD_SECS".to_string(),
            reason: format!(
                "{default_short_threshold_secs} is outside {}..={}",
                SHORT_THRESHOLD_RANGE.start(),
                SHORT_THRESHOLD_RANGE.end()
            ),
        });
    }

    let cache_ttl_secs = parse_u64("YTOPS_CACHE_TTL_SECS", "3600")?;

    Ok(AppConfig {
        youtube_api_key,
        api_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        default_max_items,
        default_short_threshold_secs,
        cache_ttl_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
