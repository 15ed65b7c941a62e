use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "CANOPY_API_URL";
pub const API_TIMEOUT_VAR: &str = "CANOPY_API_TIMEOUT_SECS";
pub const CLICK_QUEUE_VAR: &str = "CANOPY_CLICK_QUEUE";

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CLICK_QUEUE: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: Url,
    pub request_timeout: Duration,
    pub click_queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            click_queue_capacity: DEFAULT_CLICK_QUEUE,
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::from_filename(".env").ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(API_URL_VAR) {
            config.set_api_url(&value)?;
        }
        if let Some(value) = lookup(API_TIMEOUT_VAR) {
            config.request_timeout = Duration::from_secs(positive(API_TIMEOUT_VAR, &value)?);
        }
        if let Some(value) = lookup(CLICK_QUEUE_VAR) {
            config.click_queue_capacity = positive(CLICK_QUEUE_VAR, &value)? as usize;
        }

        Ok(config)
    }

    pub fn set_api_url(&mut self, value: &str) -> Result<(), ConfigError> {
        self.api_url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
            var: API_URL_VAR,
            source,
        })?;
        Ok(())
    }
}

fn positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_owned(),
        }),
    }
}
