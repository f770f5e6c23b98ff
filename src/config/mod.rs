// ABOUTME: Configuration module for the SignifyLearn server
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SignifyLearn

//! Configuration module
//!
//! All settings come from environment variables (optionally loaded from a
//! `.env` file); see [`environment::ServerConfig`].

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsOrigins, ServerConfig};
