//! Fuzz target for decryption of attacker-controlled bytes
//!
//! Feeds raw input as ciphertext, nonce, key and associated data of arbitrary
//! lengths to every scheme.
//!
//! # Invariants
//!
//! - Decryption never panics, whatever the buffer lengths
//! - Wrong lengths are invalid-argument errors, never authentication errors
//! - Garbage never authenticates; the output buffer is zeroed on failure

#![no_main]

use arbitrary::Arbitrary;
use commitframe_crypto::{AEaH, AEtH, ChaSIV, CommittingAead, ErrorKind, EtH, HtAE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct GarbageInput {
    ciphertext: Vec<u8>,
    nonce: Vec<u8>,
    key: Vec<u8>,
    associated_data: Vec<u8>,
    /// Output buffer length, independent of the ciphertext
    output_len: u16,
}

fn exercise<S: CommittingAead>(input: &GarbageInput) {
    let mut output = vec![0xFFu8; usize::from(input.output_len)];
    let result = S::decrypt(
        &mut output,
        &input.ciphertext,
        &input.nonce,
        &input.key,
        &input.associated_data,
    );

    let sizes_valid = input.key.len() == S::KEY_SIZE
        && input.nonce.len() == S::NONCE_SIZE
        && S::plaintext_len(input.ciphertext.len()) == Some(output.len());

    match result {
        Ok(()) => panic!("{}: random bytes must not authenticate", S::NAME),
        Err(err) if sizes_valid => {
            assert_eq!(err.kind(), ErrorKind::AuthenticationFailure, "{}", S::NAME);
            assert!(output.iter().all(|&b| b == 0), "{}: output not wiped", S::NAME);
        },
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{}", S::NAME);
            assert!(output.iter().all(|&b| b == 0xFF), "{}: output touched", S::NAME);
        },
    }
}

fuzz_target!(|input: GarbageInput| {
    exercise::<EtH>(&input);
    exercise::<AEaH>(&input);
    exercise::<HtAE>(&input);
    exercise::<ChaSIV>(&input);
    exercise::<AEtH>(&input);
});
