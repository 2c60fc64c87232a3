//! # State Proof Verifier
//!
//! Verifies that a transaction was recorded by the ledger and that enough
//! network nodes signed the resulting record file hash.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): byte cursor, signature file decoders and
//!   the quorum check; pure logic, no I/O
//! - **Ports Layer** (`ports/`): the inbound API and the collaborator traits
//!   (archive, address book, record file)
//! - **Adapters Layer** (`adapters/`): JSON proof archive and signature file
//!   set parsing
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Trust Model
//!
//! - A hash is accepted when more than one node attests to it and its count
//!   reaches `floor(n / 3)` of the `n` signature files
//! - One bad signature from a known node fails the whole proof
//! - Length prefixes are bounded before any allocation

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export public API
pub use adapters::{parse_signature_files, JsonProofArchive};
pub use domain::config::{ConfigError, QuorumRule, UnknownSignerPolicy, VerifierConfig};
pub use domain::crypto::NodePublicKey;
pub use domain::cursor::{BinaryCursor, LengthField};
pub use domain::entities::{
    AddressBook, ConsensusResult, FormatVersion, LegacySignature, NodeId, RecordFile, Sha384Hash,
    SignatureArtifact, SignatureArtifacts, StateProofBundle, V2SignatureFile, V5SignatureFile,
};
pub use domain::errors::{
    CollaboratorError, DecodeError, ErrorKind, StateProofError, StateProofResult,
};
pub use domain::quorum::{QuorumReport, QuorumVerifier};
pub use domain::signature_file::SignatureFileDecoder;
pub use ports::inbound::StateProofApi;
pub use ports::outbound::{AddressBookParser, ProofArchive, RecordFileParser};
pub use service::{normalize_transaction_id, StateProofService};
