//! # Domain Entities
//!
//! Value types built fresh for each verification call.

use super::constants::SHA384_LENGTH;
use std::collections::{BTreeMap, HashSet};

/// Network participant identifier, e.g. `0.0.3`.
pub type NodeId = String;

/// SHA-384 digest
pub type Sha384Hash = [u8; SHA384_LENGTH];

/// Node id to hex-encoded DER (SubjectPublicKeyInfo) RSA public key.
///
/// Ordered so that every pass over the nodes is deterministic.
pub type AddressBook = BTreeMap<NodeId, String>;

/// Node id to decoded signature file.
pub type SignatureArtifacts = BTreeMap<NodeId, SignatureArtifact>;

/// Wire format a signature artifact was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    Legacy,
    V2,
    V5,
}

/// Standalone type-tagged signature block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacySignature {
    pub signature: Vec<u8>,
}

/// V2 signature file: file hash followed by its signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct V2SignatureFile {
    pub hash: Sha384Hash,
    pub signature: Vec<u8>,
}

/// V5 signature file: signed content hash and signed metadata hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct V5SignatureFile {
    pub content_hash: Sha384Hash,
    pub signature: Vec<u8>,
    pub metadata_hash: Sha384Hash,
    pub metadata_signature: Vec<u8>,
}

/// Normalized decode of one node's signature file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureArtifact {
    Legacy(LegacySignature),
    V2(V2SignatureFile),
    V5(V5SignatureFile),
}

impl SignatureArtifact {
    pub fn format_version(&self) -> FormatVersion {
        match self {
            SignatureArtifact::Legacy(_) => FormatVersion::Legacy,
            SignatureArtifact::V2(_) => FormatVersion::V2,
            SignatureArtifact::V5(_) => FormatVersion::V5,
        }
    }

    /// Hash the node attests to. Legacy blocks carry none.
    pub fn content_hash(&self) -> Option<&Sha384Hash> {
        match self {
            SignatureArtifact::Legacy(_) => None,
            SignatureArtifact::V2(file) => Some(&file.hash),
            SignatureArtifact::V5(file) => Some(&file.content_hash),
        }
    }

    /// Signature over the content hash.
    pub fn signature(&self) -> &[u8] {
        match self {
            SignatureArtifact::Legacy(block) => &block.signature,
            SignatureArtifact::V2(file) => &file.signature,
            SignatureArtifact::V5(file) => &file.signature,
        }
    }

    /// Metadata hash and its signature (V5 only).
    pub fn metadata(&self) -> Option<(&Sha384Hash, &[u8])> {
        match self {
            SignatureArtifact::V5(file) => Some((&file.metadata_hash, &file.metadata_signature)),
            _ => None,
        }
    }
}

/// Outcome of the quorum tally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsensusResult {
    /// This hash reached the threshold
    Consensus(Sha384Hash),
    NoConsensus,
}

impl ConsensusResult {
    pub fn hash(&self) -> Option<&Sha384Hash> {
        match self {
            ConsensusResult::Consensus(hash) => Some(hash),
            ConsensusResult::NoConsensus => None,
        }
    }

    pub fn is_consensus(&self) -> bool {
        matches!(self, ConsensusResult::Consensus(_))
    }
}

/// Parsed record file: included transactions and the stream hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordFile {
    /// Underscore-joined transaction ids, e.g. `0_0_100_1614556800_123456789`
    pub transaction_ids: HashSet<String>,
    pub hash: Vec<u8>,
}

impl RecordFile {
    pub fn contains(&self, transaction_id: &str) -> bool {
        self.transaction_ids.contains(transaction_id)
    }
}

/// Raw files extracted from a state proof payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateProofBundle {
    pub address_books: Vec<Vec<u8>>,
    pub record_file: Vec<u8>,
    /// File name (node id) to signature file bytes
    pub signature_files: BTreeMap<String, Vec<u8>>,
}
