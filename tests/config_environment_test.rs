// ABOUTME: Integration tests for loading server configuration from process environment
// ABOUTME: Serialized because they mutate environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use signify_learn::config::{CorsOrigins, ServerConfig};
use signify_learn::errors::ErrorCode;
use std::env;

const KEYS: [&str; 6] = [
    "HOST",
    "PORT",
    "DATABASE_URL",
    "DATABASE_NAME",
    "SEED_ON_STARTUP",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8000);
    assert_eq!(config.database_url, "sqlite:signify.db");
    assert!(!config.database_url_set);
    assert!(config.seed_on_startup);
    assert_eq!(config.cors_origins, CorsOrigins::Any);
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    env::set_var("PORT", "9000");
    env::set_var("DATABASE_URL", "sqlite:/tmp/learn.db");
    env::set_var("SEED_ON_STARTUP", "false");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://learn.example.com");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.port, 9000);
    assert!(config.database_url_set);
    assert_eq!(config.database_name, "learn");
    assert!(!config.seed_on_startup);
    assert_eq!(
        config.cors_origins,
        CorsOrigins::List(vec!["https://learn.example.com".to_owned()])
    );
}

#[test]
#[serial]
fn test_from_env_rejects_bad_port() {
    clear_env();
    env::set_var("PORT", "99999");

    let err = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigError);
}
