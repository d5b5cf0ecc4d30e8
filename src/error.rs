//! Error types for the console summary crate.

use thiserror::Error;

/// Errors the summary surface can produce.
///
/// There is deliberately no validation taxonomy: descriptor contents are
/// accepted verbatim and the only render failure is the sink refusing a
/// write.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summary write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging initialization failed: {0}")]
    Logging(String),
}
