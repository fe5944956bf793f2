//! Fuzz target for encrypt/decrypt across every transform
//!
//! # Strategy
//!
//! - Arbitrary plaintext and associated data (including empty)
//! - Arbitrary key and nonce, truncated to each scheme's sizes
//! - One arbitrary corruption applied after encryption
//!
//! # Invariants
//!
//! - Encryption never panics and output is exactly plaintext + overhead
//! - Encryption is deterministic
//! - Roundtrip recovers the plaintext
//! - Any corruption fails with an authentication error and a zeroed buffer

#![no_main]

use arbitrary::Arbitrary;
use commitframe_crypto::{AEaH, AEtH, ChaSIV, CommittingAead, EtH, HtAE, TransformError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct TransformScenario {
    key: [u8; 32],
    nonce: [u8; 24],
    plaintext: Vec<u8>,
    associated_data: Vec<u8>,
    corruption: Corruption,
}

#[derive(Debug, Clone, Arbitrary)]
enum Corruption {
    /// Flip bits in one ciphertext byte
    Ciphertext { index: u16, mask: u8 },
    /// Flip bits in one nonce byte
    Nonce { index: u8, mask: u8 },
    /// Flip bits in one key byte
    Key { index: u8, mask: u8 },
    /// Append a byte to the associated data
    ExtendAssociatedData(u8),
}

fn exercise<S: CommittingAead>(scenario: &TransformScenario) {
    let key = &scenario.key[..S::KEY_SIZE];
    let nonce = &scenario.nonce[..S::NONCE_SIZE];
    let ad = &scenario.associated_data;

    // INVARIANT 1: Encryption of well-sized inputs succeeds with fixed overhead
    let Ok(ciphertext) = S::seal(&scenario.plaintext, nonce, key, ad) else {
        panic!("{}: encryption with valid sizes must succeed", S::NAME);
    };
    assert_eq!(ciphertext.len(), scenario.plaintext.len() + S::OVERHEAD);

    // INVARIANT 2: Deterministic
    let again = S::seal(&scenario.plaintext, nonce, key, ad);
    assert_eq!(again.as_ref(), Ok(&ciphertext), "{}: encryption must be deterministic", S::NAME);

    // INVARIANT 3: Roundtrip
    let opened = S::open(&ciphertext, nonce, key, ad);
    assert!(
        opened.as_ref().is_ok_and(|p| p.as_slice() == scenario.plaintext.as_slice()),
        "{}: roundtrip must recover the plaintext",
        S::NAME
    );

    // INVARIANT 4: Corruption is rejected and leaves nothing behind
    let mut ciphertext = ciphertext;
    let mut nonce = nonce.to_vec();
    let mut key = key.to_vec();
    let mut ad = ad.clone();
    match scenario.corruption {
        Corruption::Ciphertext { index, mask } => {
            let i = usize::from(index) % ciphertext.len();
            ciphertext[i] ^= mask.max(1);
        },
        Corruption::Nonce { index, mask } => {
            let i = usize::from(index) % nonce.len();
            nonce[i] ^= mask.max(1);
        },
        Corruption::Key { index, mask } => {
            let i = usize::from(index) % key.len();
            key[i] ^= mask.max(1);
        },
        Corruption::ExtendAssociatedData(byte) => ad.push(byte),
    }

    let mut plaintext = vec![0xFFu8; scenario.plaintext.len()];
    let result = S::decrypt(&mut plaintext, &ciphertext, &nonce, &key, &ad);
    assert_eq!(
        result,
        Err(TransformError::AuthenticationFailed),
        "{}: corruption accepted",
        S::NAME
    );
    assert!(plaintext.iter().all(|&b| b == 0), "{}: plaintext not wiped", S::NAME);
}

fuzz_target!(|scenario: TransformScenario| {
    exercise::<EtH>(&scenario);
    exercise::<AEaH>(&scenario);
    exercise::<HtAE>(&scenario);
    exercise::<ChaSIV>(&scenario);
    exercise::<AEtH>(&scenario);
});
