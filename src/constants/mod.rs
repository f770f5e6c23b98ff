// ABOUTME: Constants module grouping service identity, environment keys, and defaults
// ABOUTME: Single source for names and values shared by config, logging, routes, and binaries

//! Constants module
//!
//! Constants are grouped by domain so the configuration loader, the logging
//! setup and the diagnostic routes agree on names and defaults.

/// Service identity used in logs and responses
pub mod service_names {
    /// Name of the HTTP service
    pub const SIGNIFY_LEARN_API: &str = "signify-learn-api";
    /// Message returned by the root endpoint
    pub const ROOT_MESSAGE: &str = "SignifyLearn API running";
}

/// Environment variable names
pub mod env_keys {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const PORT: &str = "PORT";
    /// Document store URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Display name of the document store
    pub const DATABASE_NAME: &str = "DATABASE_NAME";
    /// Whether the server seeds empty collections at startup
    pub const SEED_ON_STARTUP: &str = "SEED_ON_STARTUP";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// Bind port
    pub const PORT: u16 = 8000;
    /// Document store URL
    pub const DATABASE_URL: &str = "sqlite:signify.db";
    /// Seed empty collections at startup
    pub const SEED_ON_STARTUP: bool = true;
    /// Allow every origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Log filter
    pub const LOG_LEVEL: &str = "info";
}

/// Status strings reported by `/test`
pub mod diagnostics {
    /// Backend is serving requests
    pub const BACKEND_RUNNING: &str = "✅ Running";
    /// No store attached
    pub const DATABASE_NOT_INITIALIZED: &str = "⚠️ Available but not initialized";
    /// Store attached and collections listed
    pub const DATABASE_WORKING: &str = "✅ Connected & Working";
    /// Prefix for a store that is attached but failed to list collections
    pub const DATABASE_ERROR_PREFIX: &str = "⚠️ Connected but Error: ";
    /// `DATABASE_URL` was set explicitly
    pub const URL_SET: &str = "✅ Set";
    /// `DATABASE_URL` fell back to the default
    pub const URL_NOT_SET: &str = "❌ Not Set";
    /// Store attached
    pub const CONNECTED: &str = "Connected";
    /// No store attached
    pub const NOT_CONNECTED: &str = "Not Connected";
    /// Maximum number of collection names reported
    pub const MAX_COLLECTIONS: usize = 10;
    /// Maximum number of characters of a store error echoed back
    pub const MAX_ERROR_CHARS: usize = 80;
}
