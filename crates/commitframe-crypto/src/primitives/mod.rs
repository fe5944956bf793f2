//! Adapters over the underlying cipher, AEAD and hash crates
//!
//! The transforms only ever talk to these functions. Callers validate buffer
//! sizes first; the adapters take slices of the validated lengths.

pub(crate) mod aead;
pub(crate) mod keyed_hash;
pub(crate) mod stream;

use subtle::ConstantTimeEq;

/// Constant-time equality of two byte strings.
///
/// Slices of different length compare unequal.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
