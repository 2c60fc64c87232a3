//! # Signature File Decoding
//!
//! Decoders for the three signature file layouts (big-endian throughout):
//!
//! ```text
//! Legacy block : u32 type (= 1) | u8 len | len bytes signature
//! V2 file      : 48 bytes hash | u8 marker (= 3) | u8 len | len bytes signature
//! V5 file      : u32 version | 48 bytes content hash | legacy block
//!                | 48 bytes metadata hash | legacy block
//! ```
//!
//! V5 is two legacy blocks bracketing two hash blocks, so it reuses the
//! legacy decoder for both signatures. V2 and V5 must consume their input
//! exactly.
//!
//! A complete file on disk starts with a one-byte format marker
//! (`4` for V2, `5` for V5); [`SignatureFileDecoder::decode_file`] dispatches
//! on it.

use super::constants::{
    FILE_HASH_MARKER, INT_SIZE, SHA384_LENGTH, SHA384_WITH_RSA_MAX_LENGTH, SHA384_WITH_RSA_TYPE,
    SIGNATURE_FILE_FORMAT_V5, SIGNATURE_FILE_V2_MARKER,
};
use super::cursor::{BinaryCursor, LengthField};
use super::entities::{
    LegacySignature, Sha384Hash, SignatureArtifact, V2SignatureFile, V5SignatureFile,
};
use super::errors::DecodeError;

/// Signature file decoder bounded by a maximum signature length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureFileDecoder {
    max_signature_length: usize,
}

impl Default for SignatureFileDecoder {
    fn default() -> Self {
        Self::new(SHA384_WITH_RSA_MAX_LENGTH)
    }
}

impl SignatureFileDecoder {
    pub fn new(max_signature_length: usize) -> Self {
        Self {
            max_signature_length,
        }
    }

    pub fn max_signature_length(&self) -> usize {
        self.max_signature_length
    }

    /// Decode a type-tagged signature block.
    ///
    /// Returns the block and the bytes it occupied (type tag, length field
    /// and signature).
    pub fn decode_legacy(
        &self,
        cursor: &mut BinaryCursor<'_>,
    ) -> Result<(LegacySignature, usize), DecodeError> {
        let signature_type = cursor.read_u32_be()?;
        if signature_type != SHA384_WITH_RSA_TYPE {
            return Err(DecodeError::UnsupportedSignatureType(signature_type));
        }

        let (length, signature) =
            cursor.read_length_prefixed_block(LengthField::Byte, self.max_signature_length, true)?;

        Ok((
            LegacySignature {
                signature: signature.to_vec(),
            },
            length + INT_SIZE,
        ))
    }

    /// Decode a V2 signature file body (after the leading file-hash marker).
    pub fn decode_v2(&self, cursor: &mut BinaryCursor<'_>) -> Result<V2SignatureFile, DecodeError> {
        let hash = read_hash(cursor)?;

        let marker = cursor.read_byte()?;
        if marker != SIGNATURE_FILE_V2_MARKER {
            return Err(DecodeError::UnexpectedDelimiter(marker));
        }

        let (_, signature) =
            cursor.read_length_prefixed_block(LengthField::Byte, self.max_signature_length, false)?;

        cursor.expect_exhausted()?;

        Ok(V2SignatureFile {
            hash,
            signature: signature.to_vec(),
        })
    }

    /// Decode a V5 signature file body (after the leading version byte).
    pub fn decode_v5(&self, cursor: &mut BinaryCursor<'_>) -> Result<V5SignatureFile, DecodeError> {
        // object stream signature version, unused
        cursor.read_u32_be()?;

        let content_hash = read_hash(cursor)?;
        let (content, _) = self.decode_legacy(cursor)?;

        let metadata_hash = read_hash(cursor)?;
        let (metadata, _) = self.decode_legacy(cursor)?;

        cursor.expect_exhausted()?;

        Ok(V5SignatureFile {
            content_hash,
            signature: content.signature,
            metadata_hash,
            metadata_signature: metadata.signature,
        })
    }

    /// Decode a complete signature file, dispatching on its leading byte.
    pub fn decode_file(&self, bytes: &[u8]) -> Result<SignatureArtifact, DecodeError> {
        let mut cursor = BinaryCursor::new(bytes);
        match cursor.read_byte()? {
            FILE_HASH_MARKER => self.decode_v2(&mut cursor).map(SignatureArtifact::V2),
            SIGNATURE_FILE_FORMAT_V5 => self.decode_v5(&mut cursor).map(SignatureArtifact::V5),
            other => Err(DecodeError::UnsupportedFileVersion(other)),
        }
    }
}

fn read_hash(cursor: &mut BinaryCursor<'_>) -> Result<Sha384Hash, DecodeError> {
    let mut hash = [0u8; SHA384_LENGTH];
    hash.copy_from_slice(cursor.read_fixed(SHA384_LENGTH)?);
    Ok(hash)
}
