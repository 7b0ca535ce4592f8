#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub default_max_items: usize,
    pub default_short_threshold_secs: u64,
    pub cache_ttl_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("youtube_api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_max_items", &self.default_max_items)
            .field(
                "default_short_threshold_secs",
                &self.default_short_threshold_secs,
            )
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .finish()
    }
}
