//! Application configuration module
//!
//! Provides configuration types for the application: which backend to talk
//! to, whether to answer from canned data, and the timings the network layer
//! and the search box use.
//!
//! Values come from three places, later ones winning:
//!
//! 1. compiled-in defaults (`mock-data` feature decides the mock switch),
//! 2. an optional TOML file ([`AppConfig::from_toml_str`]),
//! 3. explicit builder calls.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Live API host
pub const DEFAULT_SERVER_URL: &str = "https://qa-api.socioinfonavit.com";

/// Secure-store service identifier
pub const DEFAULT_SESSION_SERVICE: &str = "com.socioinfonavit.app";

/// Compile-time mock/real switch
pub const USE_MOCK_DATA: bool = cfg!(feature = "mock-data");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
    /// Answer every request from canned data
    pub use_mock_data: bool,
    /// Simulated latency of every mock call
    pub mock_delay: Duration,
    /// How long the mock "timeout" credential hangs before failing
    pub mock_timeout_delay: Duration,
    /// Transport timeout for real calls
    pub request_timeout: Duration,
    /// Quiet period after the last keystroke before a search runs
    pub search_debounce: Duration,
    /// Secure-store service identifier
    pub session_service: String,
    /// Override for the directory holding the session file
    pub session_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            use_mock_data: USE_MOCK_DATA,
            mock_delay: Duration::from_millis(500),
            mock_timeout_delay: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            search_debounce: Duration::from_millis(500),
            session_service: DEFAULT_SESSION_SERVICE.to_string(),
            session_dir: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document into a builder seeded with its values
    ///
    /// ```toml
    /// server_url = "https://qa-api.socioinfonavit.com"
    /// use_mock_data = false
    /// mock_delay_ms = 250
    /// search_debounce_ms = 300
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<AppConfigBuilder, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        Ok(file.into_builder())
    }

    /// Read and parse a TOML file
    pub fn from_toml_file(path: impl Into<PathBuf>) -> Result<AppConfigBuilder, ConfigError> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;
        Self::from_toml_str(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            let parsed = reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.session_service.trim().is_empty() {
            return Err(ConfigError::MissingValue("session_service"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    use_mock_data: Option<bool>,
    mock_delay: Option<Duration>,
    mock_timeout_delay: Option<Duration>,
    request_timeout: Option<Duration>,
    search_debounce: Option<Duration>,
    session_service: Option<String>,
    session_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    pub fn use_mock_data(mut self, enabled: bool) -> Self {
        self.use_mock_data = Some(enabled);
        self
    }

    pub fn mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = Some(delay);
        self
    }

    pub fn mock_timeout_delay(mut self, delay: Duration) -> Self {
        self.mock_timeout_delay = Some(delay);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = Some(debounce);
        self
    }

    pub fn session_service(mut self, service: impl Into<String>) -> Self {
        self.session_service = Some(service.into());
        self
    }

    pub fn session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_url: self.server_url,
            use_mock_data: self.use_mock_data.unwrap_or(defaults.use_mock_data),
            mock_delay: self.mock_delay.unwrap_or(defaults.mock_delay),
            mock_timeout_delay: self.mock_timeout_delay.unwrap_or(defaults.mock_timeout_delay),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            search_debounce: self.search_debounce.unwrap_or(defaults.search_debounce),
            session_service: self.session_service.unwrap_or(defaults.session_service),
            session_dir: self.session_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk shape; durations are whole milliseconds
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    server_url: Option<String>,
    use_mock_data: Option<bool>,
    mock_delay_ms: Option<u64>,
    mock_timeout_delay_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    search_debounce_ms: Option<u64>,
    session_service: Option<String>,
    session_dir: Option<PathBuf>,
}

impl FileConfig {
    fn into_builder(self) -> AppConfigBuilder {
        AppConfigBuilder {
            server_url: self.server_url,
            use_mock_data: self.use_mock_data,
            mock_delay: self.mock_delay_ms.map(Duration::from_millis),
            mock_timeout_delay: self.mock_timeout_delay_ms.map(Duration::from_millis),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            search_debounce: self.search_debounce_ms.map(Duration::from_millis),
            session_service: self.session_service,
            session_dir: self.session_dir,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),
}
