//! Error types for committing AEAD transforms

use thiserror::Error;

/// Errors from transform operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A buffer does not have the exact length the scheme requires
    #[error("invalid {param} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Name of the offending argument
        param: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Ciphertext is shorter than the scheme's fixed overhead
    #[error("invalid {param} length: expected at least {min}, got {actual}")]
    BelowMinimumLength {
        /// Name of the offending argument
        param: &'static str,
        /// Minimum length in bytes
        min: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Recomputed tag or commitment did not match the ciphertext
    #[error("authentication failed")]
    AuthenticationFailed,
}

/// Coarse classification of [`TransformError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller passed a buffer of the wrong size
    InvalidArgument,
    /// Ciphertext, nonce, key or associated data was not authentic
    AuthenticationFailure,
}

impl TransformError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. } | Self::BelowMinimumLength { .. } => {
                ErrorKind::InvalidArgument
            },
            Self::AuthenticationFailed => ErrorKind::AuthenticationFailure,
        }
    }

    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Every transform error is final for the call that produced it. Size
    /// errors are caller bugs, and a rejected ciphertext never authenticates
    /// on retry with the same inputs.
    pub fn is_fatal(&self) -> bool {
        match self.kind() {
            ErrorKind::InvalidArgument | ErrorKind::AuthenticationFailure => true,
        }
    }
}
