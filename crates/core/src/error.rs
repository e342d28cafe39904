use thiserror::Error;

/// Errors raised when parsing domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid transcript role: {0} (expected user|assistant)")]
    InvalidRole(String),
}
