//! Test fixtures: deterministic RSA keys and signature file builders.
//!
//! Enabled for unit tests and, through the `test-utils` feature, for the
//! workspace integration tests and benches.

use crate::domain::constants::{
    FILE_HASH_MARKER, SHA384_LENGTH, SHA384_WITH_RSA_TYPE, SIGNATURE_FILE_FORMAT_V5,
    SIGNATURE_FILE_V2_MARKER,
};
use crate::domain::entities::{Sha384Hash, SignatureArtifact, V2SignatureFile, V5SignatureFile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rsa::pkcs8::EncodePublicKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha384};
use std::sync::OnceLock;

/// 1024-bit keys produce 128-byte signatures, which fit the one-byte length
/// field of the signature blocks.
const TEST_KEY_BITS: usize = 1024;
const TEST_KEY_COUNT: usize = 4;

static TEST_KEYS: OnceLock<Vec<RsaPrivateKey>> = OnceLock::new();

/// One of a small pool of deterministic keys; `index` wraps around.
pub fn test_key(index: usize) -> &'static RsaPrivateKey {
    let keys = TEST_KEYS.get_or_init(|| {
        (0..TEST_KEY_COUNT as u64)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(0x5eed_0000 + seed);
                RsaPrivateKey::new(&mut rng, TEST_KEY_BITS).expect("generate test key")
            })
            .collect()
    });
    &keys[index % TEST_KEY_COUNT]
}

/// Hex-encoded DER SubjectPublicKeyInfo, as found in an address book.
pub fn public_key_hex(key: &RsaPrivateKey) -> String {
    let der = key
        .to_public_key()
        .to_public_key_der()
        .expect("encode public key");
    hex::encode(der.as_bytes())
}

/// Sign `SHA-384(hash)` with PKCS#1 v1.5.
pub fn sign_hash(key: &RsaPrivateKey, hash: &[u8]) -> Vec<u8> {
    let digest = Sha384::digest(hash);
    key.sign(Pkcs1v15Sign::new::<Sha384>(), &digest)
        .expect("sign hash")
}

/// Hash filled with a single byte, handy for telling buckets apart.
pub fn filled_hash(byte: u8) -> Sha384Hash {
    [byte; SHA384_LENGTH]
}

pub fn encode_legacy_block(signature: &[u8]) -> Vec<u8> {
    let length = u8::try_from(signature.len()).expect("signature fits a one-byte length");
    let mut bytes = SHA384_WITH_RSA_TYPE.to_be_bytes().to_vec();
    bytes.push(length);
    bytes.extend_from_slice(signature);
    bytes
}

/// V2 body, without the leading file-hash marker.
pub fn encode_v2_body(hash: &Sha384Hash, signature: &[u8]) -> Vec<u8> {
    let length = u8::try_from(signature.len()).expect("signature fits a one-byte length");
    let mut bytes = hash.to_vec();
    bytes.push(SIGNATURE_FILE_V2_MARKER);
    bytes.push(length);
    bytes.extend_from_slice(signature);
    bytes
}

/// V5 body, without the leading version byte.
pub fn encode_v5_body(
    content_hash: &Sha384Hash,
    signature: &[u8],
    metadata_hash: &Sha384Hash,
    metadata_signature: &[u8],
) -> Vec<u8> {
    let mut bytes = 1u32.to_be_bytes().to_vec();
    bytes.extend_from_slice(content_hash);
    bytes.extend(encode_legacy_block(signature));
    bytes.extend_from_slice(metadata_hash);
    bytes.extend(encode_legacy_block(metadata_signature));
    bytes
}

/// Complete V2 signature file signed by `key`.
pub fn signed_v2_file(key: &RsaPrivateKey, hash: &Sha384Hash) -> Vec<u8> {
    let mut bytes = vec![FILE_HASH_MARKER];
    bytes.extend(encode_v2_body(hash, &sign_hash(key, hash)));
    bytes
}

/// Complete V5 signature file signed by `key`.
pub fn signed_v5_file(
    key: &RsaPrivateKey,
    content_hash: &Sha384Hash,
    metadata_hash: &Sha384Hash,
) -> Vec<u8> {
    let mut bytes = vec![SIGNATURE_FILE_FORMAT_V5];
    bytes.extend(encode_v5_body(
        content_hash,
        &sign_hash(key, content_hash),
        metadata_hash,
        &sign_hash(key, metadata_hash),
    ));
    bytes
}

pub fn signed_v2_artifact(key: &RsaPrivateKey, hash: &Sha384Hash) -> SignatureArtifact {
    SignatureArtifact::V2(V2SignatureFile {
        hash: *hash,
        signature: sign_hash(key, hash),
    })
}

pub fn signed_v5_artifact(
    key: &RsaPrivateKey,
    content_hash: &Sha384Hash,
    metadata_hash: &Sha384Hash,
) -> SignatureArtifact {
    SignatureArtifact::V5(V5SignatureFile {
        content_hash: *content_hash,
        signature: sign_hash(key, content_hash),
        metadata_hash: *metadata_hash,
        metadata_signature: sign_hash(key, metadata_hash),
    })
}
