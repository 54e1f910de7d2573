//! Error types for authentication option handling.

use thiserror::Error;

/// Primary error type for option parsing and changeset application.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Changeset payload was not a JSON object.
    #[error("invalid settings payload")]
    InvalidPayload,
    /// Field contained an invalid value.
    #[error("invalid value for '{field}' in '{section}': {reason}")]
    InvalidField {
        /// Section that failed validation.
        section: String,
        /// Field that failed validation.
        field: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Field did not exist in the target section.
    #[error("unknown field '{field}' in '{section}' settings")]
    UnknownField {
        /// Section where the unknown field was encountered.
        section: String,
        /// Name of the unexpected field.
        field: String,
    },
}

/// Convenience alias for option handling results.
pub type ConfigResult<T> = Result<T, ConfigError>;
