use std::process::ExitStatus;

use thiserror::Error;

/// Failures raised while invoking or decoding the external scanner.
///
/// None of these abort a run: the pipeline catches them and emits a
/// structured `{"error": ...}` report instead of a device list.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scanner process could not be spawned at all.
    #[error("could not launch scanner: {0}")]
    Launch(#[from] std::io::Error),

    /// The scanner ran but reported failure.
    #[error("scanner exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// The scanner's report could not be decoded.
    #[error("could not decode scanner output: {0}")]
    Decode(String),
}
