use std::{fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::models::MAX_COMMENTS_CEILING;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "ytmood.toml";
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub const ENV_NAME_API_KEY: &str = "YOUTUBE_API_KEY";
pub const ENV_NAME_API_BASE_URL: &str = "YOUTUBE_API_BASE_URL";

/// Left in config templates; treated the same as no key.
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Comment bodies are cut to this many characters.
    pub max_text_len: usize,
    pub max_author_len: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout_secs: 15,
            max_text_len: 1000,
            max_author_len: 50,
        }
    }
}

impl ApiConfig {
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
            .ok_or_else(|| {
                anyhow!(
                    "No YouTube Data API key configured.\n\
                     Set {ENV_NAME_API_KEY} or `api.api_key` in {DEFAULT_CONFIG_FILE_NAME}.\n\
                     Get a key from https://console.cloud.google.com/"
                )
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub default_max_comments: u32,
    /// How many scored comments the report carries as samples.
    pub sample_size: usize,
    /// Length of the word-cloud ranking.
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_max_comments: 100,
            sample_size: 10,
            top_words: 20,
        }
    }
}

impl Config {
    /// Loads `file_path`, or `ytmood.toml` from the working directory when no
    /// path is given. A missing default file yields the default configuration;
    /// a missing explicit file is an error. Environment overrides are applied last.
    pub fn load(file_path: Option<&Path>) -> Result<Self> {
        let mut cfg = match file_path {
            Some(path) => Self::from_file(path)?,
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                Ok(content) => {
                    log::info!("Loading configuration from {DEFAULT_CONFIG_FILE_NAME}");
                    Self::from_toml(&content)
                        .with_context(|| format!("Failed to parse {DEFAULT_CONFIG_FILE_NAME}"))?
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    log::info!("{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration.");
                    Self::default()
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("Failed to read {DEFAULT_CONFIG_FILE_NAME}"));
                }
            },
        };

        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies environment overrides; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_empty(ENV_NAME_API_KEY) {
            self.api.api_key = Some(key);
        }
        if let Some(url) = non_empty(ENV_NAME_API_BASE_URL) {
            log::info!("Using YouTube API base URL from {ENV_NAME_API_BASE_URL}: {url}");
            self.api.base_url = url;
        }
    }

    fn validate(&self) -> Result<()> {
        let max = self.analysis.default_max_comments;
        if max == 0 || max > MAX_COMMENTS_CEILING {
            return Err(anyhow!(
                "analysis.default_max_comments must be between 1 and {MAX_COMMENTS_CEILING}, got {max}"
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(anyhow!("api.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}
