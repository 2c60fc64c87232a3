//! # SHA-384 with RSA
//!
//! Node signatures are RSASSA-PKCS1-v1_5 over `SHA-384(hash)`, where `hash`
//! is the 48-byte hash read from the signature file.

use rsa::pkcs8::DecodePublicKey;
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use sha2::{Digest, Sha384};

/// RSA public key of a network node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePublicKey {
    inner: RsaPublicKey,
}

impl NodePublicKey {
    /// Parse a hex-encoded DER SubjectPublicKeyInfo.
    pub fn from_hex(hex_der: &str) -> Option<Self> {
        let der = hex::decode(hex_der.trim()).ok()?;
        Self::from_der(&der)
    }

    pub fn from_der(der: &[u8]) -> Option<Self> {
        RsaPublicKey::from_public_key_der(der)
            .ok()
            .map(|inner| Self { inner })
    }

    /// Verify `signature` over `SHA-384(hash)`.
    pub fn verify_hash(&self, hash: &[u8], signature: &[u8]) -> bool {
        let digest = Sha384::digest(hash);
        self.inner
            .verify(Pkcs1v15Sign::new::<Sha384>(), &digest, signature)
            .is_ok()
    }
}

impl From<RsaPublicKey> for NodePublicKey {
    fn from(inner: RsaPublicKey) -> Self {
        Self { inner }
    }
}
