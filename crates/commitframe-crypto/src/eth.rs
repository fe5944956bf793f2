//! Encrypt-then-Hash over `ChaCha20`
//!
//! ```text
//! core = ChaCha20(key, nonce) ⊕ plaintext
//! tag  = BLAKE2b-256(key, nonce ‖ ad ‖ core ‖ LE64(|ad|) ‖ LE64(|core|))
//! out  = core ‖ tag
//! ```
//!
//! The keyed-hash tag is both the MAC and the key commitment. The nonce is
//! fixed-length, so the two trailing lengths are enough to make the hash input
//! unambiguous.

use zeroize::Zeroizing;

use crate::{
    error::TransformError,
    primitives::{self, keyed_hash, stream},
    validation,
};

const SCHEME: &str = "EtH";

/// Key size (32 bytes)
pub const KEY_SIZE: usize = stream::CHACHA20_KEY_SIZE;

/// Nonce size (12 bytes)
pub const NONCE_SIZE: usize = stream::CHACHA20_NONCE_SIZE;

/// Tag size (32 bytes)
pub const TAG_SIZE: usize = 32;

/// Encrypt `plaintext` into `ciphertext`.
///
/// `ciphertext` must be exactly `plaintext.len() + TAG_SIZE` bytes.
pub fn encrypt(
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<(), TransformError> {
    validation::equal_to_size("ciphertext", ciphertext.len(), plaintext.len() + TAG_SIZE)?;
    validation::equal_to_size("nonce", nonce.len(), NONCE_SIZE)?;
    validation::equal_to_size("key", key.len(), KEY_SIZE)?;

    let (core, tag) = ciphertext.split_at_mut(plaintext.len());
    stream::chacha20_xor(core, plaintext, nonce, key);
    tag.copy_from_slice(&*compute_tag(key, nonce, associated_data, core));
    Ok(())
}

/// Verify and decrypt `ciphertext` into `plaintext`.
///
/// The tag is checked before the keystream is applied. On failure
/// `plaintext` is zeroed.
pub fn decrypt(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8],
    key: &[u8],
    associated_data: &[u8],
) -> Result<(), TransformError> {
    validation::not_less_than_min("ciphertext", ciphertext.len(), TAG_SIZE)?;
    validation::equal_to_size("plaintext", plaintext.len(), ciphertext.len() - TAG_SIZE)?;
    validation::equal_to_size("nonce", nonce.len(), NONCE_SIZE)?;
    validation::equal_to_size("key", key.len(), KEY_SIZE)?;

    let (core, tag) = ciphertext.split_at(plaintext.len());
    let computed_tag = compute_tag(key, nonce, associated_data, core);
    if !primitives::ct_eq(&*computed_tag, tag) {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }

    stream::chacha20_xor(plaintext, core, nonce, key);
    Ok(())
}

fn compute_tag(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    core: &[u8],
) -> Zeroizing<[u8; TAG_SIZE]> {
    let mut lengths = [0u8; 16];
    lengths[..8].copy_from_slice(&(associated_data.len() as u64).to_le_bytes());
    lengths[8..].copy_from_slice(&(core.len() as u64).to_le_bytes());

    let mut tag = Zeroizing::new([0u8; TAG_SIZE]);
    keyed_hash::blake2b_256(&mut tag, key, &[nonce, associated_data, core, &lengths]);
    tag
}
