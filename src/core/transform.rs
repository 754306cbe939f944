//! Key transformation.
//!
//! Keys are prefixed first, then upper-cased, so an upper-cased result has an
//! upper-cased prefix too. Values are never touched.
//!
//! Upper-casing can map distinct keys onto one (`Key` and `key` both become
//! `KEY`). Entries are visited in ascending order of their original keys and
//! the later one wins, so the value of the greatest original key survives.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::core::secret::SecretMap;

/// How keys are rewritten before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Prepended to every key. Empty means no prefix.
    pub prefix: String,
    /// Upper-case every key (full Unicode mapping) after prefixing.
    pub upper_case: bool,
}

impl TransformOptions {
    pub fn new(prefix: impl Into<String>, upper_case: bool) -> Self {
        Self {
            prefix: prefix.into(),
            upper_case,
        }
    }

    /// Whether applying these options leaves every key unchanged.
    pub fn is_noop(&self) -> bool {
        self.prefix.is_empty() && !self.upper_case
    }

    /// Rewrite a single key.
    pub fn apply(&self, key: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + key.len());
        out.push_str(&self.prefix);
        out.push_str(key);
        if self.upper_case {
            out = out.to_uppercase();
        }
        out
    }
}

/// Produce a new mapping with every key rewritten by `options`.
///
/// Never fails. Colliding keys follow the last-wins rule described in the
/// module docs and are reported at `warn` level.
pub fn transform(map: &SecretMap, options: &TransformOptions) -> SecretMap {
    if options.is_noop() {
        return map.clone();
    }

    let mut out = SecretMap::new();
    // Original key that produced each output key, for collision reporting.
    let mut origin: HashMap<String, &str> = HashMap::new();

    for (key, value) in map {
        let new_key = options.apply(key);
        if let Some(previous) = origin.insert(new_key.clone(), key.as_str()) {
            warn!(
                key = %new_key,
                dropped = %previous,
                kept = %key,
                "keys collide after transform, keeping the later one"
            );
        }
        out.insert(new_key, value.clone());
    }

    debug!(
        keys_in = map.len(),
        keys_out = out.len(),
        prefixed = !options.prefix.is_empty(),
        upper_case = options.upper_case,
        "transformed keys"
    );

    out
}
