//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Idle time after which a visitor's session is dropped.
    pub session_ttl: chrono::Duration,
    /// Simulated processing time of the trip planner.
    pub itinerary_delay: Duration,
    /// Simulated processing time of a booking.
    pub booking_delay: Duration,
    /// Browser origin allowed to call the API with credentials.
    pub allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8501)),
            log_level: Level::INFO,
            session_ttl: chrono::Duration::minutes(60),
            itinerary_delay: Duration::from_millis(2000),
            booking_delay: Duration::from_millis(3000),
            allowed_origin: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
            })?,
            None => defaults.bind_address,
        };

        let log_level = match lookup("RUST_LOG") {
            Some(raw) => raw.parse::<Level>().map_err(|_| {
                ConfigError::InvalidValue(
                    "RUST_LOG".to_string(),
                    format!("'{}' is not a valid log level", raw),
                )
            })?,
            None => defaults.log_level,
        };

        let session_ttl = match parse_number(&lookup, "SESSION_TTL_MINUTES")? {
            Some(0) => {
                return Err(ConfigError::InvalidValue(
                    "SESSION_TTL_MINUTES".to_string(),
                    "must be at least 1".to_string(),
                ))
            }
            Some(minutes) => chrono::Duration::minutes(minutes as i64),
            None => defaults.session_ttl,
        };

        let itinerary_delay = parse_number(&lookup, "ITINERARY_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.itinerary_delay);
        let booking_delay = parse_number(&lookup, "BOOKING_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.booking_delay);

        let allowed_origin = lookup("ALLOWED_ORIGIN").filter(|origin| !origin.trim().is_empty());

        Ok(Self {
            bind_address,
            log_level,
            session_ttl,
            itinerary_delay,
            booking_delay,
            allowed_origin,
        })
    }
}

fn parse_number<F>(lookup: &F, key: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8501");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.session_ttl, chrono::Duration::minutes(60));
        assert_eq!(config.itinerary_delay, Duration::from_secs(2));
        assert_eq!(config.booking_delay, Duration::from_secs(3));
        assert!(config.allowed_origin.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("BIND_ADDRESS", "0.0.0.0:9000"),
            ("RUST_LOG", "debug"),
            ("SESSION_TTL_MINUTES", "5"),
            ("ITINERARY_DELAY_MS", "0"),
            ("BOOKING_DELAY_MS", "10"),
            ("ALLOWED_ORIGIN", "http://localhost:3000"),
        ])
        .unwrap();

        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.session_ttl, chrono::Duration::minutes(5));
        assert_eq!(config.itinerary_delay, Duration::ZERO);
        assert_eq!(config.booking_delay, Duration::from_millis(10));
        assert_eq!(config.allowed_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let err = load(&[("BIND_ADDRESS", "not-an-address")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "BIND_ADDRESS"));
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let err = load(&[("BOOKING_DELAY_MS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(key, _) if key == "BOOKING_DELAY_MS"));
    }

    #[test]
    fn zero_session_ttl_is_rejected() {
        assert!(load(&[("SESSION_TTL_MINUTES", "0")]).is_err());
    }
}
