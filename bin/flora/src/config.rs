use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;
use crate::storage::MAX_HISTORY;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub address: SocketAddr,
    pub history_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            history_capacity: MAX_HISTORY,
        }
    }
}

impl Config {
    /// Reads `FLORA_HOST`, `FLORA_PORT` and `FLORA_HISTORY`, falling back to
    /// `0.0.0.0:5000` with a full-size history.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("FLORA_HOST") {
            let ip = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;
            config.address.set_ip(ip);
        }

        if let Some(port) = lookup("FLORA_PORT") {
            let port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
            config.address.set_port(port);
        }

        if let Some(history) = lookup("FLORA_HISTORY") {
            config.history_capacity = match history.parse() {
                Ok(capacity) if (1..=MAX_HISTORY).contains(&capacity) => capacity,
                _ => return Err(ConfigError::InvalidHistory(history)),
            };
        }

        Ok(config)
    }
}
