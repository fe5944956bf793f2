//! Hash-then-AEAD (commit to all inputs) over `ChaCha20-Poly1305`
//!
//! ```text
//! subkey ‖ commitment = BLAKE2b-512(key, nonce ‖ ad)
//! core ‖ tag          = ChaCha20-Poly1305(subkey, nonce, aad = ∅, plaintext)
//! out                 = core ‖ tag ‖ commitment
//! ```
//!
//! One hash both derives the AEAD subkey and commits to key, nonce and
//! associated data. Inputs are not length-encoded because the nonce is
//! fixed-length.

use zeroize::Zeroizing;

use crate::{
    error::TransformError,
    primitives::{self, aead, keyed_hash},
    validation,
};

const SCHEME: &str = "HtAE";

/// Key size (32 bytes)
pub const KEY_SIZE: usize = aead::KEY_SIZE;

/// Nonce size (12 bytes)
pub const NONCE_SIZE: usize = aead::NONCE_SIZE;

/// Poly1305 tag size (16 bytes)
pub const TAG_SIZE: usize = aead::TAG_SIZE;

/// Commitment size (32 bytes)
pub const COMMITMENT_SIZE: usize = 32;

/// Zeroized on drop; first half is the subkey, second half the commitment.
struct Derived(Zeroizing<[u8; KEY_SIZE + COMMITMENT_SIZE]>);

impl Derived {
    fn new(key: &[u8], nonce: &[u8], associated_data: &[u8]) -> Self {
        let mut output = Zeroizing::new([0u8; KEY_SIZE + COMMITMENT_SIZE]);
        keyed_hash::blake2b_512(&mut output, key, &[nonce, associated_data]);
        Self(output)
    }

    fn subkey(&self) -> &[u8] {
        &self.0[..KEY_SIZE]
    }

    fn commitment(&self) -> &[u8] {
        &self.0[KEY_SIZE..]
    }
}

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

    let derived = Derived::new(key, nonce, associated_data);
    let (sealed, commitment) = ciphertext.split_at_mut(plaintext.len() + TAG_SIZE);
    aead::seal(sealed, plaintext, nonce, derived.subkey());
    commitment.copy_from_slice(derived.commitment());
    Ok(())
}

/// Verify and decrypt `ciphertext` into `plaintext`.
///
/// The commitment is checked before the AEAD runs under the derived subkey.
/// On any failure `plaintext` is zeroed.
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

    let derived = Derived::new(key, nonce, associated_data);
    let (sealed, commitment) = ciphertext.split_at(ciphertext.len() - COMMITMENT_SIZE);
    if !primitives::ct_eq(derived.commitment(), commitment) {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }

    // Poly1305 rejection is distinguishable by timing from commitment rejection.
    if aead::open(plaintext, sealed, nonce, derived.subkey()).is_err() {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }
    Ok(())
}
