//! Widget configuration.
//!
//! DESIGN
//! ======
//! The backend base URL is injected through `WidgetConfig` rather than baked
//! into request code, so tests can point the widget at a mock server. There
//! is no environment or file layer; hosts build the config in code.

use crate::state::mode::Mode;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while building a [`WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL did not parse as an absolute http(s) URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:5000`.
    pub base_url: String,
    pub timeouts: HttpTimeouts,
    /// Mode the widget starts in.
    pub initial_mode: Mode,
    /// When `false` the widget behaves like a single-endpoint chat:
    /// mentor mode only, no uploads.
    pub documents_enabled: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeouts: HttpTimeouts::default(),
            initial_mode: Mode::default(),
            documents_enabled: true,
        }
    }
}

impl WidgetConfig {
    /// Build a config targeting `base_url` with default timeouts and modes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, ..Self::default() })
    }

    #[must_use]
    pub fn with_timeouts(mut self, timeouts: HttpTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    #[must_use]
    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    #[must_use]
    pub fn with_documents_enabled(mut self, enabled: bool) -> Self {
        self.documents_enabled = enabled;
        self
    }

    /// Join an endpoint path such as `/ask` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        other => Err(ConfigError::InvalidBaseUrl(format!("unsupported scheme '{other}' in {trimmed}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
