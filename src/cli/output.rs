//! Output helpers.
//!
//! stdout carries the secret payload and nothing else. Errors and hints go
//! to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;
use std::io::{self, Write};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

/// Write the payload to stdout, ending with exactly one newline.
///
/// An empty payload writes nothing.
pub fn payload(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_payload(&mut out, text)?;
    out.flush()
}

fn write_payload(out: &mut impl Write, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Print an error message to stderr (red).
///
/// Example: `✗ the format "xml" is not supported`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check --region and --aws-profile`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}
