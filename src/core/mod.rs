//! Core library components.
//!
//! Retrieval, parsing, key transformation, and rendering of a single secret.

pub mod config;
pub mod constants;
pub mod env;
pub mod format;
pub mod secret;
pub mod store;
pub mod transform;
pub mod validation;

pub use format::{render, serialize, Format};
pub use secret::{parse, SecretMap};
pub use transform::{transform, TransformOptions};
