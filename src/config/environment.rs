// ABOUTME: Environment-based server configuration with typed parsing and defaults
// ABOUTME: Loads .env via dotenvy, then reads bind address, store URL, seeding and CORS settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

use crate::constants::{defaults, env_keys};
use crate::database::Database;
use signify_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use tracing::{debug, info};

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (configured as `*`)
    Any,
    /// Only the listed origins
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated origin list
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

impl fmt::Display for CorsOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::List(origins) => f.write_str(&origins.join(",")),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Document store URL
    pub database_url: String,
    /// Whether `DATABASE_URL` was set rather than defaulted
    pub database_url_set: bool,
    /// Display name of the document store
    pub database_name: String,
    /// Seed empty collections when the server starts
    pub seed_on_startup: bool,
    /// CORS origin policy
    pub cors_origins: CorsOrigins,
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric or boolean variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a numeric or boolean variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var(env_keys::PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("{} must be a port number, got '{raw}': {e}", env_keys::PORT))
            })?,
            None => defaults::PORT,
        };

        let seed_on_startup = match var(env_keys::SEED_ON_STARTUP) {
            Some(raw) => parse_bool(env_keys::SEED_ON_STARTUP, &raw)?,
            None => defaults::SEED_ON_STARTUP,
        };

        let explicit_url = var(env_keys::DATABASE_URL);
        let database_url_set = explicit_url.is_some();
        let database_url = explicit_url.unwrap_or_else(|| defaults::DATABASE_URL.to_owned());
        let database_name = var(env_keys::DATABASE_NAME)
            .unwrap_or_else(|| Database::name_from_url(&database_url));

        Ok(Self {
            host: var(env_keys::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            port,
            database_url,
            database_url_set,
            database_name,
            seed_on_startup,
            cors_origins: CorsOrigins::parse(
                &var(env_keys::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_owned()),
            ),
        })
    }

    /// `host:port` string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "SignifyLearn API Configuration: bind={} database={} (url {}) seed_on_startup={} cors={}",
            self.bind_address(),
            self.database_name,
            if self.database_url_set { "set" } else { "default" },
            self.seed_on_startup,
            self.cors_origins,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            port: defaults::PORT,
            database_url: defaults::DATABASE_URL.to_owned(),
            database_url_set: false,
            database_name: Database::name_from_url(defaults::DATABASE_URL),
            seed_on_startup: defaults::SEED_ON_STARTUP,
            cors_origins: CorsOrigins::Any,
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "{key} must be a boolean (true/false), got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signify_core::errors::ErrorCode;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppResult<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.database_name, "signify");
        assert!(!config.database_url_set);
        assert!(config.seed_on_startup);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9100"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEED_ON_STARTUP", "no"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://signify.example.com"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9100");
        assert!(config.database_url_set);
        assert_eq!(config.database_name, "memory");
        assert!(!config.seed_on_startup);
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "http://localhost:3000".to_owned(),
                "https://signify.example.com".to_owned()
            ])
        );
        assert!(config.summary().contains("seed_on_startup=false"));
    }

    #[test]
    fn test_database_name_override_and_empty_values() {
        let config = config_from(&[("DATABASE_NAME", "signify_prod"), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.database_name, "signify_prod");
        assert!(!config.database_url_set);
        assert_eq!(config.database_url, "sqlite:signify.db");
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);

        let err = config_from(&[("SEED_ON_STARTUP", "maybe")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_wildcard_wins_in_origin_list() {
        assert_eq!(CorsOrigins::parse("https://a.example, *"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse(""), CorsOrigins::Any);
    }
}
