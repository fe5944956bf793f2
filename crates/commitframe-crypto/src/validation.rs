//! Argument length checks shared by every transform
//!
//! All checks run before any primitive is invoked, so a size error never
//! leaves partial output behind.

use zeroize::Zeroize;

use crate::error::TransformError;

/// Require `actual == expected`.
pub(crate) fn equal_to_size(
    param: &'static str,
    actual: usize,
    expected: usize,
) -> Result<(), TransformError> {
    if actual != expected {
        tracing::debug!(param, expected, actual, "rejected buffer length");
        return Err(TransformError::InvalidLength { param, expected, actual });
    }
    Ok(())
}

/// Require `actual >= min`.
pub(crate) fn not_less_than_min(
    param: &'static str,
    actual: usize,
    min: usize,
) -> Result<(), TransformError> {
    if actual < min {
        tracing::debug!(param, min, actual, "rejected buffer length");
        return Err(TransformError::BelowMinimumLength { param, min, actual });
    }
    Ok(())
}

/// Wipe the plaintext buffer and produce an authentication error.
///
/// Must be the only way a transform reports a tag or commitment mismatch so the
/// output buffer is never left holding unauthenticated bytes.
pub(crate) fn wipe_and_reject(scheme: &'static str, plaintext: &mut [u8]) -> TransformError {
    plaintext.zeroize();
    tracing::debug!(scheme, "authentication failed");
    TransformError::AuthenticationFailed
}
