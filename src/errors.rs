// Error types shared across the service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

/// Failure kinds for the review pipeline.
///
/// The sanitizer itself is total and never produces one of these; all
/// failures happen at the boundary (request validation, the upstream
/// call, configuration).
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Missing or empty required input. Rejected before anything is
    /// sent upstream.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The external model call failed (network, auth, quota, malformed
    /// response). Not retried.
    #[error("upstream model error: {0}")]
    Upstream(String),

    /// Required credential or setting absent or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),
}
