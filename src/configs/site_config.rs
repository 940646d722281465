use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::SiteError;

const SITE_CONFIG: &str = include_str!("../../assets/site.json");
const MAX_SCROLL_DURATION_MS: u32 = 10_000;

lazy_static! {
    static ref HTTP_URL: Regex = Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(/\S*)?$").unwrap();
}

/// Page settings embedded from `assets/site.json`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub repository_url: String,
    /// Follow the host color scheme and show the theme toggles.
    pub theming: bool,
    pub scroll_duration_ms: u32,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Radica".to_string(),
            repository_url: "https://github.com/RadicaDev".to_string(),
            theming: true,
            scroll_duration_ms: 500,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses the embedded config. Callers fall back to `SiteConfig::default()`
    /// on error once logging is up.
    pub fn embedded() -> Result<Self, SiteError> {
        Self::from_json(SITE_CONFIG)
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if !HTTP_URL.is_match(&self.repository_url) {
            return Err(SiteError::InvalidUrl(self.repository_url.clone()));
        }
        if self.scroll_duration_ms == 0 || self.scroll_duration_ms > MAX_SCROLL_DURATION_MS {
            return Err(SiteError::InvalidDuration(self.scroll_duration_ms));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level, SiteError> {
        log::Level::from_str(&self.log_level).map_err(|_| {
            SiteError::InvalidLogLevel(self.log_level.clone())
        })
    }

    pub fn scroll_duration(&self) -> f64 {
        f64::from(self.scroll_duration_ms)
    }
}
