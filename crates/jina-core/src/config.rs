use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.jina.ai";

pub const API_KEY_ENV: &str = "JINA_API_KEY";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(10),
        }
    }

    /// Reads `JINA_API_KEY` plus the optional `JINA_BASE_URL` and
    /// `JINA_{CONNECT,READ,WRITE}_TIMEOUT_MS` overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{API_KEY_ENV} is not configured")))?;

        let mut cfg = Self::new(api_key);
        if let Ok(base_url) = std::env::var("JINA_BASE_URL") {
            if !base_url.trim().is_empty() {
                cfg.base_url = base_url;
            }
        }
        cfg.connect_timeout = env_millis("JINA_CONNECT_TIMEOUT_MS", cfg.connect_timeout);
        cfg.read_timeout = env_millis("JINA_READ_TIMEOUT_MS", cfg.read_timeout);
        cfg.write_timeout = env_millis("JINA_WRITE_TIMEOUT_MS", cfg.write_timeout);
        Ok(cfg)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, connect: Duration, read: Duration, write: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self.write_timeout = write;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn env_millis(name: &str, default: Duration) -> Duration {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map_or(default, Duration::from_millis)
}
