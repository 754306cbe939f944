//! Secret mapping and parsing.
//!
//! A secret is a flat JSON object whose values are all strings. Anything else
//! (arrays, nested objects, numbers, booleans, null) is rejected.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{ParseError, Result};

/// One secret's contents, ordered by key so every rendering is deterministic.
pub type SecretMap = BTreeMap<String, String>;

/// Parse raw secret text into a [`SecretMap`].
///
/// Duplicate keys in the text resolve to the last occurrence.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not a JSON object of strings.
pub fn parse(raw: &str) -> Result<SecretMap> {
    let map: SecretMap = serde_json::from_str(raw).map_err(ParseError::Json)?;
    debug!(keys = map.len(), "parsed secret");
    Ok(map)
}
