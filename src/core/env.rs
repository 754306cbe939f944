//! Dotenv and shell-export encoding.
//!
//! Values made only of shell-safe characters are written bare. Everything
//! else is single-quoted, with each `'` or `\` escaped outside the quotes
//! (`it's` becomes `'it'\''s'`, `C:\dir\` becomes `'C:'\\'dir'\\`). Both
//! dotenv readers and POSIX shells take single-quoted text literally, so `$`,
//! `#`, and newlines need no further escaping.
//!
//! Rendered text is read back with `dotenvy` before it is returned, and any
//! value that does not come back unchanged is an error.

use tracing::trace;

use crate::core::secret::SecretMap;
use crate::core::validation::validate_variable_name;
use crate::error::{Result, SerializationError};

/// Line style for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `KEY=VALUE`
    Dotenv,
    /// `export KEY=VALUE`
    Export,
}

impl Style {
    fn format_name(self) -> &'static str {
        match self {
            Style::Dotenv => "env",
            Style::Export => "shell_export",
        }
    }

    fn line_prefix(self) -> &'static str {
        match self {
            Style::Dotenv => "",
            Style::Export => "export ",
        }
    }
}

/// Render `map` as one line per entry, sorted by key.
///
/// # Errors
///
/// Returns `SerializationError::InvalidKey` for keys that are not variable
/// names, and `SerializationError::Dotenv` / `RoundTrip` if the rendered
/// text does not read back to `map`.
pub fn render(map: &SecretMap, style: Style) -> Result<String> {
    let mut output = String::new();

    for (key, value) in map {
        validate_variable_name(key, style.format_name())?;
        output.push_str(style.line_prefix());
        output.push_str(key);
        output.push('=');
        output.push_str(&quote(value));
        output.push('\n');
    }

    verify(map, &output)?;
    trace!(entries = map.len(), bytes = output.len(), format = style.format_name(), "rendered");

    Ok(output)
}

/// Read rendered text back with a dotenv parser and compare it to `map`.
fn verify(map: &SecretMap, rendered: &str) -> Result<()> {
    let mut parsed = SecretMap::new();
    for item in dotenvy::from_read_iter(rendered.as_bytes()) {
        let (key, value) = item.map_err(SerializationError::Dotenv)?;
        parsed.insert(key, value);
    }

    for (key, value) in map {
        if parsed.get(key) != Some(value) {
            return Err(SerializationError::RoundTrip { key: key.clone() }.into());
        }
    }

    if let Some(extra) = parsed.keys().find(|k| !map.contains_key(*k)) {
        return Err(SerializationError::RoundTrip { key: extra.clone() }.into());
    }

    Ok(())
}

/// Encode a single value.
///
/// `'` and `\` are written outside the quotes as `\'` and `\\`. A dotenv
/// reader treats a backslash inside single quotes as an escape, so it must
/// never appear there.
pub fn quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }
    if !needs_quotes(value) {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    let mut open = false;
    for ch in value.chars() {
        if matches!(ch, '\'' | '\\') {
            if open {
                quoted.push('\'');
                open = false;
            }
            quoted.push('\\');
            quoted.push(ch);
        } else {
            if !open {
                quoted.push('\'');
                open = true;
            }
            quoted.push(ch);
        }
    }
    if open {
        quoted.push('\'');
    }
    quoted
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty() || !value.chars().all(is_safe_char)
}

fn is_safe_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | '/' | ':' | '@' | '%' | '+' | ',')
}
