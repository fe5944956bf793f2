//! AEAD-and-Hash (context hashing) over `ChaCha20-Poly1305`
//!
//! ```text
//! core ‖ tag = ChaCha20-Poly1305(key, nonce, aad = ∅, plaintext)
//! commitment = BLAKE2b-256(key, nonce ‖ ad)
//! out        = core ‖ tag ‖ commitment
//! ```
//!
//! The associated data is bound only by the commitment, never by the AEAD.
//! The hash input is not length-encoded; that is sound only because the
//! nonce is fixed-length.

use zeroize::Zeroizing;

use crate::{
    error::TransformError,
    primitives::{self, aead, keyed_hash},
    validation,
};

const SCHEME: &str = "AEaH";

/// Key size (32 bytes)
pub const KEY_SIZE: usize = aead::KEY_SIZE;

/// Nonce size (12 bytes)
pub const NONCE_SIZE: usize = aead::NONCE_SIZE;

/// Poly1305 tag size (16 bytes)
pub const TAG_SIZE: usize = aead::TAG_SIZE;

/// Commitment size (32 bytes)
pub const COMMITMENT_SIZE: usize = 32;

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

    let (sealed, commitment) = ciphertext.split_at_mut(plaintext.len() + TAG_SIZE);
    aead::seal(sealed, plaintext, nonce, key);
    commitment.copy_from_slice(&*compute_commitment(key, nonce, associated_data));
    Ok(())
}

/// Verify and decrypt `ciphertext` into `plaintext`.
///
/// The commitment is checked before the AEAD runs. On any failure
/// `plaintext` is zeroed.
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

    let (sealed, commitment) = ciphertext.split_at(ciphertext.len() - COMMITMENT_SIZE);
    let computed_commitment = compute_commitment(key, nonce, associated_data);
    if !primitives::ct_eq(&*computed_commitment, commitment) {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }

    // The Poly1305 check below is a second exit point with its own timing.
    // Hiding it would need a hand-rolled ChaCha20-Poly1305 decryption.
    if aead::open(plaintext, sealed, nonce, key).is_err() {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }
    Ok(())
}

fn compute_commitment(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
) -> Zeroizing<[u8; COMMITMENT_SIZE]> {
    let mut commitment = Zeroizing::new([0u8; COMMITMENT_SIZE]);
    keyed_hash::blake2b_256(&mut commitment, key, &[nonce, associated_data]);
    commitment
}
