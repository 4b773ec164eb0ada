//! Terminal error kinds surfaced to the operator.
//!
//! forge is a local, operator-invoked tool: every error is fatal at the
//! point of detection, printed with remediation text, and turns into a
//! non-zero exit. No retries, no partial-success reporting.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("invalid value '{value}' for {flag}\nValid values are: {valid}")]
    InvalidArgument {
        flag: &'static str,
        value: String,
        valid: &'static str,
    },

    #[error("missing dependency source: {0}\nPlease run 'git submodule update --init --recursive'")]
    MissingSource(String),

    #[error(
        "no preset document at {}\nBuild the external scope first: forge --target external",
        .0.display()
    )]
    MissingPreset(PathBuf),

    #[error("command failed ({status}): {command}")]
    CommandFailed { command: String, status: String },

    #[error("failed to write preset document {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
