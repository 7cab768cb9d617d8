//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listing endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP client and concurrency settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Row filtering rules
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output artifact settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = url::Url::parse(&self.api.start_url) {
            return Err(AppError::validation(format!(
                "api.start_url is not a valid URL: {e}"
            )));
        }
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.fetcher.max_concurrent == 0 {
            return Err(AppError::validation("fetcher.max_concurrent must be > 0"));
        }
        if self.filter.required_games.is_empty() {
            return Err(AppError::validation(
                "filter.required_games must not be empty",
            ));
        }
        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            fetcher: FetcherConfig::default(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Listing endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// First page of the paginated catalog listing
    #[serde(default = "defaults::start_url")]
    pub start_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            start_url: defaults::start_url(),
        }
    }
}

/// HTTP client and concurrency settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent detail requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Row filtering rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Game versions a record must appear in to be kept
    #[serde(default = "defaults::required_games")]
    pub required_games: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            required_games: defaults::required_games(),
        }
    }
}

/// Output artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file to write
    #[serde(default = "defaults::output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn start_url() -> String {
        "https://pokeapi.co/api/v2/pokemon?limit=100&offset=0".into()
    }

    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; pokefetch/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        16
    }

    // Filter defaults
    pub fn required_games() -> Vec<String> {
        vec!["red".into(), "blue".into(), "leafgreen".into(), "white".into()]
    }

    // Output defaults
    pub fn output_path() -> String {
        "final_data.csv".into()
    }
}
