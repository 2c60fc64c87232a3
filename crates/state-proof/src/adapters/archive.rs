//! # JSON Proof Archive
//!
//! Extracts the files of a state proof from the JSON envelope served by the
//! mirror node:
//!
//! ```json
//! {
//!   "record_file": "<base64>",
//!   "address_books": ["<base64>"],
//!   "signature_files": { "0.0.3": "<base64>" }
//! }
//! ```

use crate::domain::entities::StateProofBundle;
use crate::domain::errors::CollaboratorError;
use crate::ports::outbound::ProofArchive;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct StateProofEnvelope {
    record_file: String,
    #[serde(default)]
    address_books: Vec<String>,
    signature_files: BTreeMap<String, String>,
}

/// [`ProofArchive`] over the JSON envelope with base64 file bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProofArchive;

impl JsonProofArchive {
    pub fn new() -> Self {
        Self
    }
}

fn decode_file(name: &str, encoded: &str) -> Result<Vec<u8>, CollaboratorError> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| CollaboratorError::Archive(format!("{name}: {e}")))
}

impl ProofArchive for JsonProofArchive {
    fn extract(&self, payload: &[u8]) -> Result<StateProofBundle, CollaboratorError> {
        let envelope: StateProofEnvelope = serde_json::from_slice(payload)
            .map_err(|e| CollaboratorError::Archive(e.to_string()))?;

        let record_file = decode_file("record_file", &envelope.record_file)?;
        if record_file.is_empty() {
            return Err(CollaboratorError::Archive("empty record file".to_string()));
        }
        if envelope.signature_files.is_empty() {
            return Err(CollaboratorError::Archive(
                "no signature files".to_string(),
            ));
        }

        let address_books = envelope
            .address_books
            .iter()
            .enumerate()
            .map(|(i, book)| decode_file(&format!("address_books[{i}]"), book))
            .collect::<Result<Vec<_>, _>>()?;

        let signature_files = envelope
            .signature_files
            .iter()
            .map(|(name, body)| Ok((name.clone(), decode_file(name, body)?)))
            .collect::<Result<BTreeMap<_, _>, CollaboratorError>>()?;

        Ok(StateProofBundle {
            address_books,
            record_file,
            signature_files,
        })
    }
}

/// Encode a bundle as the JSON envelope [`JsonProofArchive`] reads.
pub fn encode_bundle(bundle: &StateProofBundle) -> Vec<u8> {
    let envelope = serde_json::json!({
        "record_file": STANDARD.encode(&bundle.record_file),
        "address_books": bundle
            .address_books
            .iter()
            .map(|book| STANDARD.encode(book))
            .collect::<Vec<_>>(),
        "signature_files": bundle
            .signature_files
            .iter()
            .map(|(name, body)| (name.clone(), STANDARD.encode(body)))
            .collect::<BTreeMap<_, _>>(),
    });
    envelope.to_string().into_bytes()
}
