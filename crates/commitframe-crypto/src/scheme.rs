//! Scheme-generic access to the transforms.
//!
//! Each transform module is complete on its own. [`CommittingAead`] lets
//! callers (and the property tests) be generic over which one is in use, and
//! adds allocating `seal`/`open` helpers on top of the buffer-based functions.

use zeroize::Zeroizing;

use crate::{aeah, aeth, chasiv, error::TransformError, eth, htae};

/// A committing AEAD with fixed key, nonce and overhead sizes.
///
/// # Invariants
///
/// - `encrypt` output is always `plaintext.len() + OVERHEAD` bytes
/// - `decrypt` either succeeds or leaves the plaintext buffer all-zero
/// - Size errors are reported before any primitive runs
pub trait CommittingAead {
    /// Human-readable scheme name
    const NAME: &'static str;

    /// Required key length in bytes
    const KEY_SIZE: usize;

    /// Required nonce length in bytes
    const NONCE_SIZE: usize;

    /// Authentication tag length in bytes
    const TAG_SIZE: usize;

    /// Separate commitment length in bytes (0 when the tag doubles as one)
    const COMMITMENT_SIZE: usize;

    /// Bytes added to every plaintext
    const OVERHEAD: usize = Self::TAG_SIZE + Self::COMMITMENT_SIZE;

    /// Encrypt into a caller-sized buffer.
    fn encrypt(
        ciphertext: &mut [u8],
        plaintext: &[u8],
        nonce: &[u8],
        key: &[u8],
        associated_data: &[u8],
    ) -> Result<(), TransformError>;

    /// Verify and decrypt into a caller-sized buffer.
    fn decrypt(
        plaintext: &mut [u8],
        ciphertext: &[u8],
        nonce: &[u8],
        key: &[u8],
        associated_data: &[u8],
    ) -> Result<(), TransformError>;

    /// Ciphertext length for a plaintext of `plaintext_len` bytes.
    fn ciphertext_len(plaintext_len: usize) -> usize {
        plaintext_len + Self::OVERHEAD
    }

    /// Plaintext length for a ciphertext of `ciphertext_len` bytes, or `None`
    /// if it is shorter than the overhead.
    fn plaintext_len(ciphertext_len: usize) -> Option<usize> {
        ciphertext_len.checked_sub(Self::OVERHEAD)
    }

    /// Encrypt into a newly allocated buffer.
    fn seal(
        plaintext: &[u8],
        nonce: &[u8],
        key: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, TransformError> {
        let mut ciphertext = vec![0u8; Self::ciphertext_len(plaintext.len())];
        Self::encrypt(&mut ciphertext, plaintext, nonce, key, associated_data)?;
        Ok(ciphertext)
    }

    /// Verify and decrypt into a newly allocated buffer that is wiped on drop.
    fn open(
        ciphertext: &[u8],
        nonce: &[u8],
        key: &[u8],
        associated_data: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, TransformError> {
        let Some(len) = Self::plaintext_len(ciphertext.len()) else {
            return Err(TransformError::BelowMinimumLength {
                param: "ciphertext",
                min: Self::OVERHEAD,
                actual: ciphertext.len(),
            });
        };

        let mut plaintext = Zeroizing::new(vec![0u8; len]);
        Self::decrypt(&mut plaintext, ciphertext, nonce, key, associated_data)?;
        Ok(plaintext)
    }
}

macro_rules! committing_aead {
    ($(#[$doc:meta])* $ty:ident, $module:ident, $name:literal, $commitment:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $ty;

        impl CommittingAead for $ty {
            const NAME: &'static str = $name;
            const KEY_SIZE: usize = $module::KEY_SIZE;
            const NONCE_SIZE: usize = $module::NONCE_SIZE;
            const TAG_SIZE: usize = $module::TAG_SIZE;
            const COMMITMENT_SIZE: usize = $commitment;

            fn encrypt(
                ciphertext: &mut [u8],
                plaintext: &[u8],
                nonce: &[u8],
                key: &[u8],
                associated_data: &[u8],
            ) -> Result<(), TransformError> {
                $module::encrypt(ciphertext, plaintext, nonce, key, associated_data)
            }

            fn decrypt(
                plaintext: &mut [u8],
                ciphertext: &[u8],
                nonce: &[u8],
                key: &[u8],
                associated_data: &[u8],
            ) -> Result<(), TransformError> {
                $module::decrypt(plaintext, ciphertext, nonce, key, associated_data)
            }
        }
    };
}

committing_aead!(
    /// Encrypt-then-Hash over `ChaCha20`. See [`eth`].
    EtH,
    eth,
    "EtH",
    0
);

committing_aead!(
    /// AEAD-and-Hash over `ChaCha20-Poly1305`. See [`aeah`].
    AEaH,
    aeah,
    "AEaH",
    aeah::COMMITMENT_SIZE
);

committing_aead!(
    /// Hash-then-AEAD over `ChaCha20-Poly1305`. See [`htae`].
    HtAE,
    htae,
    "HtAE",
    htae::COMMITMENT_SIZE
);

committing_aead!(
    /// Synthetic-IV encryption over `XChaCha20`. See [`chasiv`].
    ChaSIV,
    chasiv,
    "chaSIV",
    0
);

committing_aead!(
    /// AEAD-then-Hash over chaSIV. See [`aeth`].
    AEtH,
    aeth,
    "AEtH",
    aeth::COMMITMENT_SIZE
);
