//! Synthetic-IV encryption over `XChaCha20` and keyed `BLAKE2b`
//!
//! ```text
//! subkey = BLAKE2b-256(key, nonce)
//! tag    = BLAKE2b-256(key, nonce ‖ 0x00 ‖ ad ‖ 0x00 ‖ plaintext)
//! core   = XChaCha20(subkey, tag[8..32]) ⊕ plaintext
//! out    = core ‖ tag
//! ```
//!
//! The cipher nonce is taken from the tag, which hashes the whole message, so
//! reusing the public nonce only reveals whether two messages (with the same
//! associated data) are equal. The tag is a keyed hash and therefore also
//! commits to the key.
//!
//! The zero separators are the only framing in the tag input; there is no
//! length encoding. Changing that would change every ciphertext.

use zeroize::Zeroizing;

use crate::{
    error::TransformError,
    primitives::{self, keyed_hash, stream},
    validation,
};

const SCHEME: &str = "chaSIV";

/// Separation indicator between variable-length tag inputs
const SEPARATOR: &[u8] = &[0x00];

/// Key size (32 bytes)
pub const KEY_SIZE: usize = stream::XCHACHA20_KEY_SIZE;

/// Nonce size (24 bytes)
pub const NONCE_SIZE: usize = stream::XCHACHA20_NONCE_SIZE;

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

    let subkey = derive_subkey(nonce, key);
    let tag = compute_tag(key, nonce, associated_data, plaintext);

    let (core, tag_out) = ciphertext.split_at_mut(plaintext.len());
    stream::xchacha20_xor(core, plaintext, synthetic_nonce(&*tag), &*subkey);
    tag_out.copy_from_slice(&*tag);
    Ok(())
}

/// Decrypt and verify `ciphertext` into `plaintext`.
///
/// The plaintext has to be recovered before the tag can be recomputed, so it
/// is written to `plaintext` first and wiped if verification fails.
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
    let subkey = derive_subkey(nonce, key);
    stream::xchacha20_xor(plaintext, core, synthetic_nonce(tag), &*subkey);
    drop(subkey);

    let computed_tag = compute_tag(key, nonce, associated_data, plaintext);
    if !primitives::ct_eq(&*computed_tag, tag) {
        return Err(validation::wipe_and_reject(SCHEME, plaintext));
    }
    Ok(())
}

/// Cipher nonce: the trailing `NONCE_SIZE` bytes of the tag.
fn synthetic_nonce(tag: &[u8]) -> &[u8] {
    &tag[TAG_SIZE - NONCE_SIZE..]
}

/// Stream cipher key, separated from the tagging key by hashing the nonce.
fn derive_subkey(nonce: &[u8], key: &[u8]) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut subkey = Zeroizing::new([0u8; KEY_SIZE]);
    keyed_hash::blake2b_256(&mut subkey, key, &[nonce]);
    subkey
}

fn compute_tag(
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Zeroizing<[u8; TAG_SIZE]> {
    let mut tag = Zeroizing::new([0u8; TAG_SIZE]);
    keyed_hash::blake2b_256(
        &mut tag,
        key,
        &[nonce, SEPARATOR, associated_data, SEPARATOR, plaintext],
    );
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONCE: &str = "404142434445464748494a4b4c4d4e4f5051525354555658";

    const LADIES_PLAINTEXT: &str = "4c616469657320616e642047656e746c656d656e206f662074686520636c617373206f66202739393a204966204920636f756c64206f6666657220796f75206f6e6c79206f6e652074697020666f7220746865206675747572652c2073756e73637265656e20776f756c642062652069742e";
    const LADIES_KEY: &str = "808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f";
    const LADIES_AD: &str = "50515253c0c1c2c3c4c5c6c7";
    const LADIES_CIPHERTEXT: &str = "414cb2511cefaabaa3c908935b8e5ddb067685b726343ba86a3899b42661d63e3b80b774205009414d7204ddf64ffd324c2cc974ba0128ed3ec8ea812942f5e618d17bd62406c3ee3b3bd01e2a2dd5657ebf0b04d40de7a450a9d6707ffc3c3e58726f26f1f4f33570bbed9485b762ec1b9c5799999af2436c777f63f32028b1024824414f2c8c8dcddaa9d765f9b8a0d2da";

    const DRAFTS_PLAINTEXT: &str = "496e7465726e65742d4472616674732061726520647261667420646f63756d656e74732076616c696420666f722061206d6178696d756d206f6620736978206d6f6e74687320616e64206d617920626520757064617465642c207265706c616365642c206f72206f62736f6c65746564206279206f7468657220646f63756d656e747320617420616e792074696d652e20497420697320696e617070726f70726961746520746f2075736520496e7465726e65742d447261667473206173207265666572656e6365206d6174657269616c206f7220746f2063697465207468656d206f74686572207468616e206173202fe2809c776f726b20696e2070726f67726573732e2fe2809d";
    const DRAFTS_KEY: &str = "1c9240a5eb55d38af333888604f6b5f0473917c1402b80099dca5cbc207075c0";
    const DRAFTS_AD: &str = "f33388860000000000004e91";
    const DRAFTS_CIPHERTEXT: &str = "e8a3ec096329dd24916b2b699d721ac06f2c607d1c96ecdc98f20c0602fa5d85d919ff1fcd350fd7a1cfc1c0c58f1eeb6e3fad87a67a13c34099a2d8c1a884a181c5f6e14d9d10554d426676dc5acf1ca3faeb0df9dba01f4086efe8f00359c145c671b1a1a61b7268a39dcfa28dad466eeaa5728b519e63cf44ab41b4eafbd9cc67a073e388af950d9a11043ed8f6e66b66623a24ecb5bff633443e5f12a7e41613e9a402882e36ccbc98ad74be97fcf5182b725b8c11d4a506270e95294a18a50ae565abc9abc81ea47676bc1554673d469dc825fb079cc35bb8a1390ac48063a15f143cf7478a1039aff7a3325f31b58c632822ad3e5da779d29b7939fff3cf6f0e6452c0bad3895659f180337ab6efaba48873527d83893188d21912e652cf812c1c94e98246ff";

    // (ciphertext, plaintext, key, associated data)
    fn vectors() -> [[Vec<u8>; 4]; 2] {
        let decode = |s: &str| hex::decode(s).unwrap();
        [
            [
                decode(LADIES_CIPHERTEXT),
                decode(LADIES_PLAINTEXT),
                decode(LADIES_KEY),
                decode(LADIES_AD),
            ],
            [
                decode(DRAFTS_CIPHERTEXT),
                decode(DRAFTS_PLAINTEXT),
                decode(DRAFTS_KEY),
                decode(DRAFTS_AD),
            ],
        ]
    }

    #[test]
    fn constants() {
        assert_eq!(KEY_SIZE, 32);
        assert_eq!(NONCE_SIZE, 24);
        assert_eq!(TAG_SIZE, 32);
    }

    #[test]
    fn encrypt_known_vectors() {
        let nonce = hex::decode(NONCE).unwrap();
        for [expected, plaintext, key, ad] in vectors() {
            let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
            encrypt(&mut ciphertext, &plaintext, &nonce, &key, &ad).unwrap();
            assert_eq!(ciphertext, expected);
        }
    }

    #[test]
    fn decrypt_known_vectors() {
        let nonce = hex::decode(NONCE).unwrap();
        for [ciphertext, expected, key, ad] in vectors() {
            let mut plaintext = vec![0u8; ciphertext.len() - TAG_SIZE];
            decrypt(&mut plaintext, &ciphertext, &nonce, &key, &ad).unwrap();
            assert_eq!(plaintext, expected);
        }
    }

    #[test]
    fn tag_is_keyed_hash_of_framed_input() {
        let [first, _] = vectors();
        let [ciphertext, plaintext, key, ad] = first;
        let nonce = hex::decode(NONCE).unwrap();

        let mut framed = Vec::new();
        framed.extend_from_slice(&nonce);
        framed.push(0x00);
        framed.extend_from_slice(&ad);
        framed.push(0x00);
        framed.extend_from_slice(&plaintext);

        let mut expected = [0u8; TAG_SIZE];
        keyed_hash::blake2b_256(&mut expected, &key, &[framed.as_slice()]);

        assert_eq!(&ciphertext[plaintext.len()..], &expected[..]);
    }

    #[test]
    fn nonce_reuse_only_reveals_equality() {
        let key = [7u8; KEY_SIZE];
        let nonce = [0u8; NONCE_SIZE];

        let mut a = [0u8; 4 + TAG_SIZE];
        let mut b = [0u8; 4 + TAG_SIZE];
        let mut c = [0u8; 4 + TAG_SIZE];
        encrypt(&mut a, b"left", &nonce, &key, &[]).unwrap();
        encrypt(&mut b, b"left", &nonce, &key, &[]).unwrap();
        encrypt(&mut c, b"lefu", &nonce, &key, &[]).unwrap();

        assert_eq!(a, b);
        // A one-byte plaintext change moves the synthetic nonce, so the
        // keystream differs across the whole message.
        assert_ne!(a[1..4], c[1..4]);
    }

    #[test]
    fn encrypt_rejects_invalid_sizes() {
        // (ciphertext, plaintext, nonce, key)
        let cases = [
            (TAG_SIZE - 1, 0, NONCE_SIZE, KEY_SIZE),
            (TAG_SIZE, 1, NONCE_SIZE, KEY_SIZE),
            (TAG_SIZE, 0, NONCE_SIZE + 1, KEY_SIZE),
            (TAG_SIZE, 0, NONCE_SIZE - 1, KEY_SIZE),
            (TAG_SIZE, 0, NONCE_SIZE, KEY_SIZE + 1),
            (TAG_SIZE, 0, NONCE_SIZE, KEY_SIZE - 1),
        ];

        for (c, p, n, k) in cases {
            let mut ciphertext = vec![0u8; c];
            let result =
                encrypt(&mut ciphertext, &vec![0u8; p], &vec![0u8; n], &vec![0u8; k], &[0u8; 32]);
            assert!(
                matches!(result, Err(TransformError::InvalidLength { .. })),
                "case ({c}, {p}, {n}, {k}) must be rejected"
            );
        }
    }

    #[test]
    fn decrypt_rejects_short_ciphertext() {
        let result =
            decrypt(&mut [], &[0u8; TAG_SIZE - 1], &[0u8; NONCE_SIZE], &[0u8; KEY_SIZE], &[]);
        assert!(matches!(result, Err(TransformError::BelowMinimumLength { .. })));
    }

    #[test]
    fn tampered_inputs_fail_and_leave_zeroed_plaintext() {
        let nonce = hex::decode(NONCE).unwrap();
        for vector in vectors() {
            let [ciphertext, plaintext, key, ad] = vector;
            let mut fields = [ciphertext, nonce.clone(), key, ad];
            let mut output = vec![0u8; plaintext.len()];

            for i in 0..fields.len() {
                fields[i][0] ^= 0x01;
                let [c, n, k, a] = &fields;
                let result = decrypt(&mut output, c, n, k, a);

                assert_eq!(result, Err(TransformError::AuthenticationFailed));
                assert!(output.iter().all(|&b| b == 0), "plaintext must be wiped");
                fields[i][0] ^= 0x01;
            }
        }
    }
}
