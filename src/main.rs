//! secretpull - collect a secret from AWS Secrets Manager.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretpull::cli::output;
use secretpull::cli::{execute, Cli};
use secretpull::core::constants::LOG_ENV;
use secretpull::error::{Error, RetrievalError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support.
    // stdout is reserved for the payload, so logs go to stderr.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretpull=debug")
        } else {
            EnvFilter::new("secretpull=warn")
        }
    });

    let json = cli.log_json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
        }))
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Retrieval(RetrievalError::Request { .. }) => {
                Some("check --region, --aws-profile and your AWS credentials")
            }
            Error::Retrieval(RetrievalError::BackendUnavailable(_)) => {
                Some("use --secret-file, or rebuild with --features aws")
            }
            Error::Parse(_) => Some("the secret must be a JSON object of string values"),
            Error::Format(_) => Some("use --format json|yaml|env|shell_export"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
