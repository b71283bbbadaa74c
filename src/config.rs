//! Configuration management for the production agent.
//!
//! Configuration can be set via environment variables (all optional):
//! - `AGENT_NAME` - Agent identity. Defaults to `production-agent`.
//! - `AGENT_ROLE` - Role text for the agent prompt. Defaults to a generic assistant role.
//! - `SUPPORT_EMAIL` - Contact address returned by the help tool. Defaults to `support@company.com`.
//! - `HOST` - Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Server port. Defaults to `3000`.
//! - `LOG_LEVEL` - Logging severity threshold. Defaults to `INFO`.
//! - `APP_VERSION` - Version string reported by the health/info endpoints. Defaults to `1.0.0`.
//! - `ENVIRONMENT` - Deployment environment label. Defaults to `production`.
//!
//! A `.env` file in the working directory is loaded best-effort at startup;
//! its absence is not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Process-wide configuration, populated once at startup.
///
/// Every field has a default, so the configuration is always constructible
/// with no environment variables set. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Agent identity
    pub agent_name: String,

    /// Free text for the agent prompt's Role section
    pub agent_role: String,

    /// Contact address embedded in the help tool's response
    pub support_email: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging severity threshold (case-insensitive standard names)
    pub log_level: String,

    /// Version string reported by the health and info endpoints
    pub app_version: String,

    /// Deployment environment label
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Keeps parsing testable without mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup("AGENT_NAME") {
            config.agent_name = v;
        }
        if let Some(v) = lookup("AGENT_ROLE") {
            config.agent_role = v;
        }
        if let Some(v) = lookup("SUPPORT_EMAIL") {
            config.support_email = v;
        }
        if let Some(v) = lookup("HOST") {
            config.host = v;
        }
        if let Some(v) = lookup("PORT") {
            config.port = v
                .parse()
                .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("APP_VERSION") {
            config.app_version = v;
        }
        if let Some(v) = lookup("ENVIRONMENT") {
            config.environment = v;
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_name: "production-agent".to_string(),
            agent_role: "You are a helpful production assistant.".to_string(),
            support_email: "support@company.com".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "INFO".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "production".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.agent_name, "production-agent");
        assert_eq!(config.agent_role, "You are a helpful production assistant.");
        assert_eq!(config.support_email, "support@company.com");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_version, "1.0.0");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn values_override_defaults() {
        let vars = HashMap::from([
            ("AGENT_NAME", "ops-agent"),
            ("SUPPORT_EMAIL", "ops@example.com"),
            ("PORT", "8080"),
            ("ENVIRONMENT", "staging"),
        ]);
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.agent_name, "ops-agent");
        assert_eq!(config.support_email, "ops@example.com");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "staging");
        // Unset values keep their defaults
        assert_eq!(config.app_version, "1.0.0");
    }

    #[test]
    fn invalid_port_is_fatal() {
        let vars = HashMap::from([("PORT", "not-a-number")]);
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "PORT"));
    }

    #[test]
    fn default_impl_matches_empty_lookup() {
        let config = Config::default();
        assert_eq!(config.agent_name, "production-agent");
        assert_eq!(config.port, 3000);
    }
}
