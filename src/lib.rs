//! secretpull - a secrets collecting agent.
//!
//! Pulls one secret from AWS Secrets Manager, optionally rewrites its keys,
//! and prints it for a parent process or shell to consume.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # stdout payload, stderr diagnostics
//! │   └── run           # fetch → parse → transform → serialize
//! └── core/             # Core library components
//!     ├── config        # flag / config file / default layering
//!     ├── store/        # Secret retrieval backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── aws       # AWS Secrets Manager (feature `aws`)
//!     │   └── file      # local file or stdin
//!     ├── secret        # JSON object → SecretMap
//!     ├── transform     # key prefixing and upper-casing
//!     ├── format        # json, yaml, env, shell_export
//!     └── env           # dotenv / shell quoting
//! ```
//!
//! # Example
//!
//! ```
//! use secretpull::core::{parse, render, transform, TransformOptions};
//!
//! let map = parse(r#"{"one":"value","two":"value"}"#).unwrap();
//! let map = transform(&map, &TransformOptions::new("gopher_", true));
//! let out = render(&map, "env").unwrap();
//! assert_eq!(out, "GOPHER_ONE=value\nGOPHER_TWO=value\n");
//! ```

pub mod cli;
pub mod core;
pub mod error;
