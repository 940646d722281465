use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    Config(String),
    InvalidUrl(String),
    InvalidLogLevel(String),
    InvalidDuration(u32),
    MissingAnchor(String),
    Host(String),
}

impl Display for SiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::Config(msg) => write!(f, "Config Error: {}", msg),
            SiteError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            SiteError::InvalidLogLevel(level) => write!(f, "Invalid log level: {}", level),
            SiteError::InvalidDuration(ms) => write!(f, "Invalid scroll duration: {}ms", ms),
            SiteError::MissingAnchor(id) => write!(f, "No element with id '{}'", id),
            SiteError::Host(msg) => write!(f, "Host Error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<serde_json::Error> for SiteError {
    fn from(error: serde_json::Error) -> Self {
        SiteError::Config(error.to_string())
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
