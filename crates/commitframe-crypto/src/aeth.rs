//! AEAD-then-Hash over [`chasiv`](crate::chasiv)
//!
//! ```text
//! core ‖ tag = chaSIV(key, nonce, ad, plaintext)
//! commitment = BLAKE2b-256(key, nonce ‖ ad ‖ tag)
//! out        = core ‖ tag ‖ commitment
//! ```
//!
//! The commitment hashes the inner tag rather than the whole ciphertext.
//! Nonce and tag are fixed-length, so no length encoding is needed.

use zeroize::Zeroizing;

use crate::{
    chasiv,
    error::TransformError,
    primitives::{self, keyed_hash},
    validation,
};

const SCHEME: &str = "AEtH";

/// Key size (32 bytes)
pub const KEY_SIZE: usize = chasiv::KEY_SIZE;

/// Nonce size (24 bytes)
pub const NONCE_SIZE: usize = chasiv::NONCE_SIZE;

/// Inner chaSIV tag size (32 bytes)
pub const TAG_SIZE: usize = chasiv::TAG_SIZE;

/// Commitment size (32 bytes)
pub const COMMITMENT_SIZE: usize = TAG_SIZE;

/// Encrypt `plaintext` into `ciphertext`.
///
/// `ciphertext` must be exactly `plaintext.len() + TAG_SIZE + COMMITMENT_SIZE`
/// bytes.
pub fn encrypt(
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<(), TransformError> {
    validation::equal_to_size(
        "ciphertext",
        ciphertext.len(),
        plaintext.len() + TAG_SIZE + COMMITMENT_SIZE,
    )?;
    validation::equal_to_size("nonce", nonce.len(), NONCE_SIZE)?;
    validation::equal_to_size("key", key.len(), KEY_SIZE)?;

    let (inner, commitment) = ciphertext.split_at_mut(plaintext.len() + TAG_SIZE);
    chasiv::encrypt(inner, plaintext, nonce, key, associated_data)?;
    let tag = &inner[plaintext.len()..];
    commitment.copy_from_slice(&*compute_commitment(key, nonce, associated_data, tag));
    Ok(())
}

/// Verify and decrypt `ciphertext` into `plaintext`.
///
/// The commitment is checked first; chaSIV then decrypts and verifies its own
/// tag. On any failure `plaintext` is zeroed.
pub fn decrypt(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<(), TransformError> {
    validation::not_less_than_min("ciphertext", ciphertext.len(), TAG_SIZE + COMMITMENT_SIZE)?;
    validation::equal_to_size(
        "plaintext",
        plaintext.len(),
        ciphertext.len() - TAG_SIZE - COMMITMENT_SIZE,
    )?;
    validation::equal_to_size("nonce", nonce.len(), NONCE_SIZE)?;
    validation::equal_to_size("key", key.len(), KEY_SIZE)?;

    let (inner, commitment) = ciphertext.split_at(ciphertext.len() - COMMITMENT_SIZE);
    let tag = &inner[plaintext.len()..];
    let computed_commitment = compute_commitment(key, nonce, associated_data, tag);
    if !primitives::ct_eq(&*computed_commitment, commitment) {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }

    // A tampered core passes the commitment and is only caught by chaSIV,
    // after a full decryption pass.
    chasiv::decrypt(plaintext, inner, nonce, key, associated_data)
}

fn compute_commitment(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    tag: &[u8],
) -> Zeroizing<[u8; COMMITMENT_SIZE]> {
    let mut commitment = Zeroizing::new([0u8; COMMITMENT_SIZE]);
    keyed_hash::blake2b_256(&mut commitment, key, &[nonce, associated_data, tag]);
    commitment
}
