//! `ChaCha20` (IETF, 12-byte nonce) and `XChaCha20` (24-byte nonce) keystreams
//!
//! Both start at block counter 0, matching libsodium's `crypto_stream_*_xor`.

use chacha20::{
    ChaCha20, Key, Nonce, XChaCha20, XNonce,
    cipher::{KeyIvInit, StreamCipher},
};

/// `ChaCha20` key size (32 bytes)
pub(crate) const CHACHA20_KEY_SIZE: usize = 32;

/// IETF `ChaCha20` nonce size (12 bytes)
pub(crate) const CHACHA20_NONCE_SIZE: usize = 12;

/// `XChaCha20` key size (32 bytes)
pub(crate) const XCHACHA20_KEY_SIZE: usize = 32;

/// `XChaCha20` nonce size (24 bytes)
pub(crate) const XCHACHA20_NONCE_SIZE: usize = 24;

/// Write `input ⊕ ChaCha20(key, nonce)` into `output`.
///
/// `output` and `input` have equal length; key and nonce have their fixed
/// sizes.
pub(crate) fn chacha20_xor(output: &mut [u8], input: &[u8], nonce: &[u8], key: &[u8]) {
    output.copy_from_slice(input);
    let mut cipher = ChaCha20::new(Key::from_slice(key), Nonce::from_slice(nonce));
    cipher.apply_keystream(output);
}

/// Write `input ⊕ XChaCha20(key, nonce)` into `output`.
pub(crate) fn xchacha20_xor(output: &mut [u8], input: &[u8], nonce: &[u8], key: &[u8]) {
    output.copy_from_slice(input);
    let mut cipher = XChaCha20::new(Key::from_slice(key), XNonce::from_slice(nonce));
    cipher.apply_keystream(output);
}
