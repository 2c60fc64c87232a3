//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators that turn raw proof files into the inputs of the quorum
//! check. Address book and record file formats are owned elsewhere.

use crate::domain::entities::{AddressBook, RecordFile, StateProofBundle};
use crate::domain::errors::CollaboratorError;

/// Splits a state proof payload into its named files.
pub trait ProofArchive: Send + Sync {
    fn extract(&self, payload: &[u8]) -> Result<StateProofBundle, CollaboratorError>;
}

/// Parses address book files into node id to public key.
pub trait AddressBookParser: Send + Sync {
    /// # Errors
    /// * `CollaboratorError::AddressBook` - a file could not be parsed
    fn parse_address_books(&self, books: &[Vec<u8>]) -> Result<AddressBook, CollaboratorError>;
}

/// Parses a record file into its transaction ids and hash.
pub trait RecordFileParser: Send + Sync {
    /// # Errors
    /// * `CollaboratorError::RecordFile` - the file could not be parsed
    fn parse_record_file(&self, bytes: &[u8]) -> Result<RecordFile, CollaboratorError>;
}
