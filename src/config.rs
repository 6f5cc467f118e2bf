use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Streaming
    pub token_delay_ms: u64,
    pub stream_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            token_delay_ms: 100,
            stream_buffer: 16,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: match env::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => defaults.port,
            },
            token_delay_ms: match env::var("TOKEN_DELAY_MS") {
                Ok(ms) => ms.parse()?,
                Err(_) => defaults.token_delay_ms,
            },
            stream_buffer: match env::var("STREAM_BUFFER") {
                Ok(size) => size.parse::<usize>()?.max(1),
                Err(_) => defaults.stream_buffer,
            },
        })
    }

    pub fn token_delay(&self) -> Duration {
        Duration::from_millis(self.token_delay_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
