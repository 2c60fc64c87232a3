//! # State Proof Errors
//!
//! Error types for signature-file decoding and state proof verification.
//!
//! Every error is terminal: nothing in this crate retries or falls back to a
//! default value, so the first failure is what the caller of `verify` sees.

use super::entities::NodeId;
use thiserror::Error;

/// Errors raised while decoding a signature file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes remain than the read requires
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// A length prefix is negative or exceeds the allowed maximum
    #[error("Declared length {declared} outside of [0, {max}]")]
    LengthOutOfBounds { declared: i64, max: usize },

    /// Legacy signature block carries an unknown type tag
    #[error("Unsupported signature type: {0}")]
    UnsupportedSignatureType(u32),

    /// V2 signature file has the wrong byte between hash and signature
    #[error("Unexpected signature file delimiter: {0}")]
    UnexpectedDelimiter(u8),

    /// Bytes left over after a complete V2/V5 signature file
    #[error("Extra data in signature file: {0} trailing bytes")]
    TrailingData(usize),

    /// Leading byte of a signature file names no known format
    #[error("Unsupported signature file version: {0}")]
    UnsupportedFileVersion(u8),
}

/// Failures reported by the external collaborators (archive, address book,
/// record file).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("Invalid state proof archive: {0}")]
    Archive(String),

    #[error("Invalid address book: {0}")]
    AddressBook(String),

    #[error("Invalid record file: {0}")]
    RecordFile(String),
}

/// Coarse classification of a [`StateProofError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed signature file bytes
    Format,
    /// Bad key or signature
    Cryptographic,
    /// Proof is well formed but does not hold
    BusinessLogic,
    /// Archive, address book or record file could not be processed
    Collaborator,
}

/// Errors that can occur while verifying a state proof.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateProofError {
    #[error("Malformed signature file for node {node}: {source}")]
    MalformedSignatureFile {
        node: NodeId,
        #[source]
        source: DecodeError,
    },

    /// Public key is not valid hex or not an RSA SubjectPublicKeyInfo
    #[error("Malformed public key for node {0}")]
    MalformedPublicKey(NodeId),

    /// Node signature over its content hash does not verify
    #[error("Signature verification failed for node {0}")]
    SignatureInvalid(NodeId),

    /// Node signature over its metadata hash does not verify
    #[error("Metadata signature verification failed for node {0}")]
    MetadataSignatureInvalid(NodeId),

    /// Artifact has no content hash to attest to (standalone legacy block)
    #[error("Signature file for node {0} carries no content hash")]
    MissingContentHash(NodeId),

    /// Signer is absent from the address book and the policy rejects it
    #[error("Node {0} is not in the address book")]
    UnknownNode(NodeId),

    #[error("Too many signature files: {count} > {max}")]
    TooManySignatureFiles { count: usize, max: usize },

    #[error("Transaction not found in record file: {0}")]
    TransactionNotFound(String),

    /// Consensus hash differs from the record file hash (or no consensus)
    #[error("Record file hash {expected} does not match consensus hash {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("No hash reached the consensus threshold")]
    NoConsensusReached,

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl StateProofError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StateProofError::MalformedSignatureFile { .. } => ErrorKind::Format,
            StateProofError::MalformedPublicKey(_)
            | StateProofError::SignatureInvalid(_)
            | StateProofError::MetadataSignatureInvalid(_)
            | StateProofError::MissingContentHash(_) => ErrorKind::Cryptographic,
            StateProofError::UnknownNode(_)
            | StateProofError::TooManySignatureFiles { .. }
            | StateProofError::TransactionNotFound(_)
            | StateProofError::HashMismatch { .. }
            | StateProofError::NoConsensusReached => ErrorKind::BusinessLogic,
            StateProofError::Collaborator(_) => ErrorKind::Collaborator,
        }
    }

    /// The decode error behind a format failure, if any.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            StateProofError::MalformedSignatureFile { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for state proof operations
pub type StateProofResult<T> = Result<T, StateProofError>;
