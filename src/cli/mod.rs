//! Command-line interface.

pub mod output;
pub mod run;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::core::config::{FileConfig, Overrides, Settings};
use crate::core::constants::CONFIG_ENV;
use crate::core::store;
use crate::error::Result;

/// secretpull - collect a secret from AWS Secrets Manager.
///
/// Only the secret is written to stdout. Errors and logs go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "secretpull",
    about = "Collects a secret from AWS Secrets Manager and prints it as json, yaml, env or shell exports",
    version
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["secret", "secret_file"])
))]
pub struct Cli {
    /// Secret name or ARN to collect
    #[arg(short, long, value_name = "ID", value_parser = NonEmptyStringValueParser::new())]
    pub secret: Option<String>,

    /// Read the secret JSON from a file instead of AWS ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub secret_file: Option<PathBuf>,

    /// AWS region [default: eu-west-1]
    #[arg(long)]
    pub region: Option<String>,

    /// AWS profile to use (default credential chain when omitted)
    #[arg(long = "aws-profile", value_name = "NAME")]
    pub aws_profile: Option<String>,

    /// Prepend every key with this string (applied before upper-casing)
    #[arg(long = "prepend-with", value_name = "PREFIX")]
    pub prepend_with: Option<String>,

    /// Upper-case every key
    #[arg(long)]
    pub upper_case: bool,

    /// Output format: json, yaml, env or shell_export [default: json]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Config file with defaults for the flags above
    #[arg(long, env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Write logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            secret: self.secret.clone(),
            secret_file: self.secret_file.clone(),
            region: self.region.clone(),
            profile: self.aws_profile.clone(),
            prefix: self.prepend_with.clone(),
            upper_case: self.upper_case,
            format: self.format.clone(),
        }
    }
}

/// Resolve settings, collect the secret, and print it to stdout.
///
/// # Errors
///
/// Returns the first error of any stage; nothing is printed in that case.
pub fn execute(cli: Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(cli.overrides(), file)?;
    let store = store::for_source(&settings.source)?;

    let payload = run::collect(&settings, store.as_ref())?;
    output::payload(&payload)?;
    Ok(())
}
