//! Fuzz target for signature file decoding.
//!
//! Arbitrary bytes must either decode or fail with a `DecodeError`; the
//! decoder must never panic or allocate past the signature length bound.
//!
//! ## Running
//!
//! ```bash
//! cd crates/state-proof
//! cargo +nightly fuzz run fuzz_signature_file_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use state_proof::{SignatureArtifact, SignatureFileDecoder};

fuzz_target!(|data: &[u8]| {
    let decoder = SignatureFileDecoder::default();

    let result = decoder.decode_file(data);

    // Deterministic
    assert_eq!(result, decoder.decode_file(data));

    if let Ok(artifact) = result {
        // Signatures never exceed the configured bound
        assert!(artifact.signature().len() <= decoder.max_signature_length());
        if let Some((_, metadata_signature)) = artifact.metadata() {
            assert!(metadata_signature.len() <= decoder.max_signature_length());
        }
        // Whole-file decodes always carry a content hash
        assert!(!matches!(artifact, SignatureArtifact::Legacy(_)));
        assert!(artifact.content_hash().is_some());
    }
});
