//! # Signature File Set Parsing
//!
//! Decodes every signature file of a proof and keys it by node id.

use crate::domain::entities::{NodeId, SignatureArtifacts};
use crate::domain::errors::{CollaboratorError, StateProofError, StateProofResult};
use crate::domain::signature_file::SignatureFileDecoder;
use std::collections::BTreeMap;
use tracing::debug;

const SIGNATURE_FILE_EXTENSION: &str = ".rcd_sig";

/// Node id from a signature file name: `nodes/0.0.3.rcd_sig` -> `0.0.3`.
pub fn node_id_from_file_name(name: &str) -> NodeId {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.strip_suffix(SIGNATURE_FILE_EXTENSION)
        .unwrap_or(base)
        .to_string()
}

/// Decode each file, dispatching on its leading format byte.
///
/// # Errors
/// * `MalformedSignatureFile` - the first file (by name) that fails to decode
/// * `Collaborator` - two files name the same node
pub fn parse_signature_files(
    decoder: &SignatureFileDecoder,
    files: &BTreeMap<String, Vec<u8>>,
) -> StateProofResult<SignatureArtifacts> {
    let mut artifacts = SignatureArtifacts::new();

    for (name, bytes) in files {
        let node = node_id_from_file_name(name);
        let artifact = decoder.decode_file(bytes).map_err(|source| {
            StateProofError::MalformedSignatureFile {
                node: node.clone(),
                source,
            }
        })?;

        debug!(
            node = %node,
            version = ?artifact.format_version(),
            size = bytes.len(),
            "Decoded signature file"
        );

        if artifacts.insert(node.clone(), artifact).is_some() {
            return Err(CollaboratorError::Archive(format!(
                "duplicate signature file for node {node}"
            ))
            .into());
        }
    }

    Ok(artifacts)
}
