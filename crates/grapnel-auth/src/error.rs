//! Error types for the credential engine.
//!
//! Absence of a usable credential is not an error anywhere in this crate;
//! it is modelled as `None` and callers proceed unauthenticated. The only
//! failures are malformed caller inputs.

use thiserror::Error;

/// Primary error type for credential engine inputs.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request scheme is not one the engine authenticates.
    #[error("unsupported scheme '{value}'")]
    UnsupportedScheme {
        /// Scheme string supplied by the caller.
        value: String,
    },
}

/// Convenience alias for credential engine results.
pub type AuthResult<T> = Result<T, AuthError>;
