//! Input validation for rendered output.

use crate::error::{Result, SerializationError};

/// Whether `key` is a valid shell / dotenv variable name.
///
/// Names must be non-empty, start with an ASCII letter or underscore, and
/// contain only ASCII letters, digits, and underscores.
pub fn is_variable_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Validate a key destined for `env` or `shell_export` output.
///
/// # Errors
///
/// Returns `SerializationError::InvalidKey` naming the key and format.
pub fn validate_variable_name(key: &str, format: &'static str) -> Result<()> {
    if is_variable_name(key) {
        Ok(())
    } else {
        Err(SerializationError::InvalidKey {
            key: key.to_string(),
            format,
        }
        .into())
    }
}
