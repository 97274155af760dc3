//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Default bind address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable has an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Network file to load at startup and on reload.
    pub network_path: Option<PathBuf>,

    /// Address to listen on.
    pub addr: SocketAddr,

    /// Route cache settings.
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Meaning | Default |
    /// |---|---|---|
    /// | `METRO_NETWORK` | network file | none |
    /// | `METRO_ADDR` | bind address | `127.0.0.1:3000` |
    /// | `METRO_CACHE_TTL_SECS` | route cache TTL | 600 |
    /// | `METRO_CACHE_CAPACITY` | route cache entries | 10000 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network_path = lookup("METRO_NETWORK")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let addr_str = lookup("METRO_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_str.parse().map_err(|_| ConfigError {
            var: "METRO_ADDR",
            value: addr_str.clone(),
            reason: "expected host:port",
        })?;

        let defaults = CacheConfig::default();
        let ttl = match lookup("METRO_CACHE_TTL_SECS") {
            Some(v) => Duration::from_secs(parse_number("METRO_CACHE_TTL_SECS", &v)?),
            None => defaults.ttl,
        };
        let max_capacity = match lookup("METRO_CACHE_CAPACITY") {
            Some(v) => parse_number("METRO_CACHE_CAPACITY", &v)?,
            None => defaults.max_capacity,
        };

        Ok(Self {
            network_path,
            addr,
            cache: CacheConfig { ttl, max_capacity },
        })
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        var,
        value: value.to_string(),
        reason: "expected a non-negative integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.network_path, None);
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.cache, CacheConfig::default());
    }

    #[test]
    fn custom_values() {
        let config = config(&[
            ("METRO_NETWORK", "/srv/metro/shanghai.json"),
            ("METRO_ADDR", "0.0.0.0:8080"),
            ("METRO_CACHE_TTL_SECS", "30"),
            ("METRO_CACHE_CAPACITY", "500"),
        ])
        .unwrap();

        assert_eq!(
            config.network_path,
            Some(PathBuf::from("/srv/metro/shanghai.json"))
        );
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cache.ttl, Duration::from_secs(30));
        assert_eq!(config.cache.max_capacity, 500);
    }

    #[test]
    fn empty_network_path_is_none() {
        let config = config(&[("METRO_NETWORK", "")]).unwrap();
        assert_eq!(config.network_path, None);
    }

    #[test]
    fn invalid_addr() {
        let err = config(&[("METRO_ADDR", "localhost")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for METRO_ADDR: \"localhost\" (expected host:port)"
        );
    }

    #[test]
    fn invalid_cache_numbers() {
        assert!(config(&[("METRO_CACHE_TTL_SECS", "-5")]).is_err());
        assert!(config(&[("METRO_CACHE_CAPACITY", "lots")]).is_err());
    }
}
