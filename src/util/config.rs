use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_LOG_FILTER: &str = "info";

const API_URL_VAR: &str = "CARD_VALUE_API_URL";
const LOG_FILTER_VAR: &str = "RUST_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Root of the prediction service, always ending in `/`.
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(v) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            settings.api_base_url = v.trim().to_string();
        }
        if let Some(v) = lookup(LOG_FILTER_VAR).filter(|v| !v.trim().is_empty()) {
            settings.log_filter = v;
        }

        if !settings.api_base_url.ends_with('/') {
            settings.api_base_url.push('/');
        }
        settings
    }
}

/// Process-wide settings, read from the environment on first access.
pub fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(Settings::from_env)
}
