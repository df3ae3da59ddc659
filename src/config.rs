use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, TrailError};
use crate::session::Language;
use crate::slug::DEFAULT_DEBOUNCE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Settings for building a [`crate::TrailClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub language: Language,
    pub slug_debounce: Duration,
    /// Where the session is persisted. `None` keeps it in memory.
    pub token_file: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: Language::default(),
            slug_debounce: DEFAULT_DEBOUNCE,
            token_file: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `TRAIL_API_URL`, `TRAIL_LANGUAGE`, `TRAIL_SLUG_DEBOUNCE_MS` and
    /// `TRAIL_TOKEN_FILE`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("TRAIL_API_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(TrailError::Config(format!(
                    "TRAIL_API_URL must be an http(s) URL, got {url:?}"
                )));
            }
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(language) = lookup("TRAIL_LANGUAGE") {
            config.language = Language::from_str(&language).map_err(|_| {
                TrailError::Config(format!("unsupported TRAIL_LANGUAGE {language:?}"))
            })?;
        }
        if let Some(ms) = lookup("TRAIL_SLUG_DEBOUNCE_MS") {
            let ms: u64 = ms.parse().map_err(|_| {
                TrailError::Config(format!("TRAIL_SLUG_DEBOUNCE_MS must be a number, got {ms:?}"))
            })?;
            config.slug_debounce = Duration::from_millis(ms);
        }
        config.token_file = lookup("TRAIL_TOKEN_FILE").map(PathBuf::from);

        Ok(config)
    }
}
