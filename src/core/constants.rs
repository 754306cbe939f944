//! Constants used throughout secretpull.
//!
//! Centralizes defaults and environment variable names.

/// AWS region used when neither the flag nor the config file names one.
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Output format used when none is requested.
pub const DEFAULT_FORMAT: &str = "json";

/// Path that makes the file source read from stdin.
pub const STDIN_PATH: &str = "-";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SECRETPULL_LOG";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SECRETPULL_CONFIG";
