//! Commitframe Committing AEAD Transforms
//!
//! Generic transforms that turn a stream cipher or a standard AEAD into a
//! committing AEAD. A committing scheme binds the ciphertext to the key (and,
//! depending on the transform, the nonce, associated data and plaintext), so an
//! attacker cannot craft one ciphertext that decrypts under two keys. This
//! closes partitioning oracles against password-derived keys.
//!
//! Every transform is a pair of pure functions over caller-provided buffers.
//! They never allocate; secret scratch is fixed-size and zeroized on drop.
//!
//! # Transforms
//!
//! ```text
//! EtH     ChaCha20 ──────────────────▶ core ‖ tag(32)
//! AEaH    ChaCha20-Poly1305 ─────────▶ core ‖ tag(16) ‖ commitment(32)
//! HtAE    BLAKE2b → subkey ‖ commitment
//!           └─ ChaCha20-Poly1305 ────▶ core ‖ tag(16) ‖ commitment(32)
//! chaSIV  BLAKE2b tag → XChaCha20 ──▶ core ‖ tag(32)
//! AEtH    chaSIV ────────────────────▶ core ‖ tag(32) ‖ commitment(32)
//! ```
//!
//! Each module exposes `encrypt`/`decrypt` plus its size constants. The
//! zero-sized types [`EtH`], [`AEaH`], [`HtAE`], [`AEtH`] and [`ChaSIV`]
//! implement [`CommittingAead`] for callers that want to be generic over the
//! scheme.
//!
//! # Security
//!
//! Failure handling:
//! - Buffer lengths are validated before any primitive runs
//! - Tags and commitments are compared in constant time
//! - A failed decryption leaves the plaintext buffer all-zero
//!
//! Residual timing:
//! - `AEaH`, `HtAE` and `AEtH` run the inner AEAD after the commitment check,
//!   and the inner tag check is a second, observable exit point
//!
//! Nonces:
//! - `EtH`, `AEaH` and `HtAE` require unique nonces per key
//! - `chaSIV` and `AEtH` only leak equality of messages under nonce reuse

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aeah;
pub mod aeth;
pub mod chasiv;
pub mod error;
pub mod eth;
pub mod htae;
mod primitives;
pub mod scheme;
mod validation;

pub use error::{ErrorKind, TransformError};
pub use scheme::{AEaH, AEtH, ChaSIV, CommittingAead, EtH, HtAE};
