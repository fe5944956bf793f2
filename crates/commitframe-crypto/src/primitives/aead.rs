//! `ChaCha20-Poly1305` (RFC 8439) with detached tag over caller buffers
//!
//! The transforms never pass associated data to the AEAD itself; the
//! commitment layer binds it instead.

use chacha20poly1305::{
    ChaCha20Poly1305, Key, Nonce, Tag,
    aead::{AeadInPlace, KeyInit},
};

/// `ChaCha20-Poly1305` key size (32 bytes)
pub(crate) const KEY_SIZE: usize = 32;

/// `ChaCha20-Poly1305` nonce size (12 bytes)
pub(crate) const NONCE_SIZE: usize = 12;

/// Poly1305 tag size (16 bytes)
pub(crate) const TAG_SIZE: usize = 16;

/// Encrypt `plaintext` into `output` as `ciphertext ‖ tag`.
///
/// `output` is exactly `plaintext.len() + TAG_SIZE` bytes.
pub(crate) fn seal(output: &mut [u8], plaintext: &[u8], nonce: &[u8], key: &[u8]) {
    let (body, tag_out) = output.split_at_mut(plaintext.len());
    body.copy_from_slice(plaintext);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    let Ok(tag) = cipher.encrypt_in_place_detached(Nonce::from_slice(nonce), &[], body) else {
        unreachable!("ChaCha20-Poly1305 encryption cannot fail below 256 GiB");
    };
    tag_out.copy_from_slice(&tag);
}

/// Decrypt `ciphertext ‖ tag` from `input` into `output`.
///
/// On failure `output` may hold ciphertext bytes; the caller must wipe it.
pub(crate) fn open(
    output: &mut [u8],
    input: &[u8],
    nonce: &[u8],
    key: &[u8],
) -> Result<(), chacha20poly1305::Error> {
    let (body, tag) = input.split_at(output.len());
    output.copy_from_slice(body);

    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    cipher.decrypt_in_place_detached(Nonce::from_slice(nonce), &[], output, Tag::from_slice(tag))
}
