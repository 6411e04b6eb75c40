//! Process configuration, read from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use bayespro_report::Theme;

pub const ADDR_VAR: &str = "BAYESPRO_ADDR";
pub const THEME_VAR: &str = "BAYESPRO_THEME";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidTheme { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Theme a fresh session starts with.
    pub theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup(ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_raw.clone(),
            })?;

        let theme = match lookup(THEME_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .parse::<Theme>()
                .map_err(|message| ConfigError::InvalidTheme {
                    var: THEME_VAR,
                    message,
                })?,
            None => Theme::default(),
        };

        Ok(Self { addr, theme })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8050)),
            theme: Theme::default(),
        }
    }
}
