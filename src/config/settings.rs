use log::warn;

pub const API_BASE_URL_ENV: &str = "WTA_API_BASE_URL";
pub const RATE_LIMIT_ENV: &str = "WTA_RATE_LIMIT_MS";

pub struct CollectorSettings {
    pub api_base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    pub page_size: usize,
    /// Cap on listing pages per season
    pub max_listing_pages: Option<usize>,
    pub excluded_levels: &'static str,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.wtatennis.com/tennis".to_string(),
            // The provider rejects requests without a browser-like agent
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/122.0.0.0 Safari/537.36",
            timeout_secs: 30,
            rate_limit_ms: 150,
            page_size: 100,
            max_listing_pages: Some(20),
            excluded_levels: "ITF",
        }
    }
}

pub struct OutputSettings {
    pub output_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_dir: "data/wta/tournaments".to_string(),
        }
    }
}

pub struct AppConfig {
    pub collector: CollectorSettings,
    pub output: OutputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            collector: CollectorSettings::default(),
            output: OutputSettings::default(),
        }
    }

    /// Defaults with `WTA_API_BASE_URL` / `WTA_RATE_LIMIT_MS` applied on top.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.apply_overrides(
            std::env::var(API_BASE_URL_ENV).ok(),
            std::env::var(RATE_LIMIT_ENV).ok(),
        );
        config
    }

    pub fn with_output_dir(mut self, output_dir: Option<String>) -> Self {
        if let Some(dir) = output_dir {
            self.output.output_dir = dir;
        }
        self
    }

    fn apply_overrides(&mut self, base_url: Option<String>, rate_limit: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.collector.api_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = rate_limit {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.collector.rate_limit_ms = ms,
                Err(_) => warn!("Ignoring invalid {}={:?}", RATE_LIMIT_ENV, raw),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_defaults() {
        let mut config = AppConfig::new();
        config.apply_overrides(Some("http://localhost:8080/".to_string()), Some("5".to_string()));

        assert_eq!(config.collector.api_base_url, "http://localhost:8080");
        assert_eq!(config.collector.rate_limit_ms, 5);
    }

    #[test]
    fn test_invalid_rate_limit_keeps_default() {
        let mut config = AppConfig::new();
        config.apply_overrides(None, Some("fast".to_string()));

        assert_eq!(config.collector.rate_limit_ms, 150);
        assert_eq!(config.collector.api_base_url, "https://api.wtatennis.com/tennis");
    }

    #[test]
    fn test_output_dir_override() {
        let config = AppConfig::new().with_output_dir(Some("out".to_string()));
        assert_eq!(config.output.output_dir, "out");
    }
}
