//! Server configuration read from the environment (and an optional `.env`
//! file loaded in `main`).
//!
//! | Variable              | Default     |
//! |-----------------------|-------------|
//! | `DONATION_HOST`       | `127.0.0.1` |
//! | `DONATION_PORT`       | `8080`      |
//! | `DONATION_JSON_LIMIT` | `1048576`   |
//! | `DONATION_SEED_DEMO`  | `true`      |

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
    /// Start with the demo requests and donations loaded.
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            json_limit: 1024 * 1024,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; unset keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        Ok(ServerConfig {
            host: lookup("DONATION_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse(&lookup, "DONATION_PORT", defaults.port)?,
            json_limit: parse(&lookup, "DONATION_JSON_LIMIT", defaults.json_limit)?,
            seed_demo_data: parse_flag(&lookup, "DONATION_SEED_DEMO", defaults.seed_demo_data)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { key, value }),
        },
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_use_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DONATION_HOST", "0.0.0.0"),
            ("DONATION_PORT", " 9090 "),
            ("DONATION_JSON_LIMIT", "2048"),
            ("DONATION_SEED_DEMO", "off"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.json_limit, 2048);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err =
            ServerConfig::from_lookup(lookup_from(&[("DONATION_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "DONATION_PORT",
                value: "eighty".to_string()
            }
        );
    }
}
