// src/config.rs
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PORT_ATTEMPTS: u16 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Extra ports tried after `port` when it is already in use.
    pub port_attempts: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            port_attempts: DEFAULT_PORT_ATTEMPTS,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `PORT_ATTEMPTS`, loading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: parse_or("HOST", lookup("HOST"), defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            port_attempts: parse_or("PORT_ATTEMPTS", lookup("PORT_ATTEMPTS"), defaults.port_attempts),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, %value, %default, "invalid config value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_host_and_ports() {
        let config = config_from(&[("HOST", "0.0.0.0"), ("PORT", "8080"), ("PORT_ATTEMPTS", "3")]);

        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 8080);
        assert_eq!(config.port_attempts, 3);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = config_from(&[("HOST", "not-an-ip"), ("PORT", "99999")]);

        assert_eq!(config.host, AppConfig::default().host);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
