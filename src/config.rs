use std::env;

use anyhow::{Context, Result};

use crate::trends::analyzer::DEFAULT_TOP_K;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// value has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web server binds to (PRODUCT_AGENT_BIND)
    pub bind: String,
    /// Web server port (PRODUCT_AGENT_PORT)
    pub port: u16,
    /// Request body limit for the JSON endpoints (PRODUCT_AGENT_MAX_BODY_BYTES)
    pub max_body_bytes: usize,
    /// Number of trend entries returned (PRODUCT_AGENT_TREND_LIMIT, 1..=5)
    pub trend_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            trend_limit: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PRODUCT_AGENT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PRODUCT_AGENT_PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let max_body_bytes = match lookup("PRODUCT_AGENT_MAX_BODY_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("PRODUCT_AGENT_MAX_BODY_BYTES must be a byte count, got {raw:?}")
            })?,
            None => defaults.max_body_bytes,
        };

        let trend_limit = match lookup("PRODUCT_AGENT_TREND_LIMIT") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("PRODUCT_AGENT_TREND_LIMIT must be a number, got {raw:?}")
            })?,
            None => defaults.trend_limit,
        };

        let config = Self {
            bind: lookup("PRODUCT_AGENT_BIND").unwrap_or(defaults.bind),
            port,
            max_body_bytes,
            trend_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.bind.trim().is_empty() {
            anyhow::bail!("PRODUCT_AGENT_BIND is empty. Set it to an address such as 127.0.0.1");
        }
        if !(1..=DEFAULT_TOP_K).contains(&self.trend_limit) {
            anyhow::bail!(
                "PRODUCT_AGENT_TREND_LIMIT must be between 1 and {DEFAULT_TOP_K}, got {}",
                self.trend_limit
            );
        }
        if self.max_body_bytes == 0 {
            anyhow::bail!("PRODUCT_AGENT_MAX_BODY_BYTES must be greater than zero");
        }
        Ok(())
    }

    /// `host:port` for messages, with IPv6 literals bracketed.
    pub fn display_addr(&self) -> String {
        if self.bind.contains(':') {
            format!("[{}]:{}", self.bind, self.port)
        } else {
            format!("{}:{}", self.bind, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.display_addr(), "127.0.0.1:5000");
        assert_eq!(config.trend_limit, 5);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("PRODUCT_AGENT_BIND", "0.0.0.0"),
            ("PRODUCT_AGENT_PORT", "8080"),
            ("PRODUCT_AGENT_TREND_LIMIT", "3"),
        ])
        .unwrap();
        assert_eq!(config.display_addr(), "0.0.0.0:8080");
        assert_eq!(config.trend_limit, 3);
    }

    #[test]
    fn test_ipv6_display_addr_is_bracketed() {
        let config = load_from(&[("PRODUCT_AGENT_BIND", "::1")]).unwrap();
        assert_eq!(config.display_addr(), "[::1]:5000");
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = load_from(&[("PRODUCT_AGENT_PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PRODUCT_AGENT_PORT"));
    }

    #[test]
    fn test_trend_limit_out_of_range() {
        assert!(load_from(&[("PRODUCT_AGENT_TREND_LIMIT", "0")]).is_err());
        assert!(load_from(&[("PRODUCT_AGENT_TREND_LIMIT", "6")]).is_err());
    }
}
