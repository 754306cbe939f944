//! Invocation settings.
//!
//! Settings are resolved once per run from three layers, highest first:
//! command-line flags, an optional TOML config file, built-in defaults.
//!
//! ```toml
//! [aws]
//! region = "us-east-1"
//! profile = "prod"
//!
//! [output]
//! format = "env"
//! prefix = "APP_"
//! upper_case = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants::{DEFAULT_FORMAT, DEFAULT_REGION};
use crate::core::format::Format;
use crate::core::transform::TransformOptions;
use crate::error::{ConfigError, Result};

/// Contents of a config file. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub aws: AwsSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// `[aws]` section.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AwsSection {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<String>,
    pub prefix: Option<String>,
    #[serde(default)]
    pub upper_case: bool,
}

impl FileConfig {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, or
    /// `ConfigError::Parse` if the TOML is malformed or has unknown fields.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse config file contents.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub secret: Option<String>,
    pub secret_file: Option<PathBuf>,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub prefix: Option<String>,
    pub upper_case: bool,
    pub format: Option<String>,
}

/// Where the raw secret comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// AWS Secrets Manager.
    Aws {
        secret_id: String,
        region: String,
        profile: Option<String>,
    },
    /// Local file, or stdin for `-`.
    File { path: PathBuf },
}

impl Source {
    /// Identifier handed to the store.
    pub fn id(&self) -> String {
        match self {
            Source::Aws { secret_id, .. } => secret_id.clone(),
            Source::File { path } => path.to_string_lossy().into_owned(),
        }
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: Source,
    pub transform: TransformOptions,
    pub format: Format,
}

impl Settings {
    /// Layer command-line `overrides` over `file` over defaults.
    ///
    /// A file source wins over an AWS secret id when both are somehow set;
    /// the command-line parser normally rejects that combination.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Unsupported` if the chosen format name is not
    /// recognized.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let format_name = overrides
            .format
            .or(file.output.format)
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());
        let format: Format = format_name.parse()?;

        let transform = TransformOptions::new(
            overrides.prefix.or(file.output.prefix).unwrap_or_default(),
            overrides.upper_case || file.output.upper_case,
        );

        let source = match overrides.secret_file {
            Some(path) => Source::File { path },
            None => Source::Aws {
                secret_id: overrides.secret.unwrap_or_default(),
                region: overrides
                    .region
                    .or(file.aws.region)
                    .unwrap_or_else(|| DEFAULT_REGION.to_string()),
                profile: overrides
                    .profile
                    .or(file.aws.profile)
                    .filter(|p| !p.is_empty()),
            },
        };

        debug!(
            source = %source.id(),
            format = %format,
            upper_case = transform.upper_case,
            "settings resolved"
        );

        Ok(Self {
            source,
            transform,
            format,
        })
    }
}
