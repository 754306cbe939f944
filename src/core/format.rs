//! Output formats.
//!
//! Renders a [`SecretMap`] as `json`, `yaml`, `env`, or `shell_export` text.
//! Keys are always emitted in sorted order.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::core::env::{self, Style};
use crate::core::secret::SecretMap;
use crate::error::{FormatError, Result, SerializationError};

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Single-line JSON object.
    #[default]
    Json,
    /// YAML mapping block.
    Yaml,
    /// `KEY=VALUE` lines.
    Env,
    /// `export KEY=VALUE` lines.
    ShellExport,
}

impl Format {
    /// All formats, in documentation order.
    pub const ALL: [Format; 4] = [Format::Json, Format::Yaml, Format::Env, Format::ShellExport];

    /// Name accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Env => "env",
            Format::ShellExport => "shell_export",
        }
    }

    /// Comma-separated list of every accepted name.
    pub fn names() -> String {
        Format::ALL.map(Format::as_str).join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FormatError::Unsupported(s.to_string()))
    }
}

/// Render `map` in `format`.
///
/// # Errors
///
/// Returns `SerializationError` if the mapping cannot be represented, e.g. a
/// key that is not a variable name in `env` or `shell_export` output.
pub fn serialize(map: &SecretMap, format: Format) -> Result<String> {
    debug!(format = %format, keys = map.len(), "serializing");

    match format {
        Format::Json => Ok(serde_json::to_string(map).map_err(SerializationError::Json)?),
        Format::Yaml => Ok(serde_yaml::to_string(map).map_err(SerializationError::Yaml)?),
        Format::Env => env::render(map, Style::Dotenv),
        Format::ShellExport => env::render(map, Style::Export),
    }
}

/// Render `map` in the format named `name`.
///
/// # Errors
///
/// Returns `FormatError::Unsupported` naming `name` if it is not one of
/// `json`, `yaml`, `env`, `shell_export`.
pub fn render(map: &SecretMap, name: &str) -> Result<String> {
    let format: Format = name.parse()?;
    serialize(map, format)
}
