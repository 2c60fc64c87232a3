//! # Adapters Layer
//!
//! Concrete implementations around the domain:
//! - `archive`: JSON state proof envelope ([`ProofArchive`](crate::ports::outbound::ProofArchive))
//! - `signature_files`: decodes the named signature files of a proof

pub mod archive;
pub mod signature_files;

pub use archive::{encode_bundle, JsonProofArchive};
pub use signature_files::{node_id_from_file_name, parse_signature_files};
