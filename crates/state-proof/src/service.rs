//! # State Proof Service
//!
//! Application service layer that implements the `StateProofApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`StateProofApi`)
//! - Uses the outbound ports (`ProofArchive`, `AddressBookParser`,
//!   `RecordFileParser`) to materialize the proof files
//! - Delegates decoding and quorum checks to the domain layer

use crate::adapters::archive::JsonProofArchive;
use crate::adapters::signature_files::parse_signature_files;
use crate::domain::config::{ConfigError, VerifierConfig};
use crate::domain::entities::{AddressBook, ConsensusResult, Sha384Hash, SignatureArtifacts};
use crate::domain::errors::{StateProofError, StateProofResult};
use crate::domain::quorum::QuorumVerifier;
use crate::domain::signature_file::SignatureFileDecoder;
use crate::ports::inbound::StateProofApi;
use crate::ports::outbound::{AddressBookParser, ProofArchive, RecordFileParser};
use tracing::{debug, info};

/// Rewrite an external transaction id into the record file key form:
/// `0.0.100@1614556800.123456789` -> `0_0_100_1614556800_123456789`.
pub fn normalize_transaction_id(transaction_id: &str) -> String {
    transaction_id.replace(['.', '@', '-'], "_")
}

/// State Proof Verification Service.
///
/// Holds only configuration and collaborators; every call builds its own
/// maps and buffers.
pub struct StateProofService<B, R, A = JsonProofArchive> {
    archive: A,
    address_books: B,
    record_files: R,
    decoder: SignatureFileDecoder,
    quorum: QuorumVerifier,
    max_signature_files: usize,
}

impl<B: AddressBookParser, R: RecordFileParser> StateProofService<B, R, JsonProofArchive> {
    /// Create a service reading the JSON envelope with default configuration.
    pub fn new(address_books: B, record_files: R) -> Self {
        let config = VerifierConfig::default();
        Self {
            archive: JsonProofArchive::new(),
            address_books,
            record_files,
            decoder: SignatureFileDecoder::new(config.max_signature_length),
            quorum: QuorumVerifier::new(&config),
            max_signature_files: config.max_signature_files,
        }
    }
}

impl<B, R, A> StateProofService<B, R, A>
where
    B: AddressBookParser,
    R: RecordFileParser,
    A: ProofArchive,
{
    /// Create a service with an explicit archive and configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if `config` fails validation.
    pub fn with_config(
        archive: A,
        address_books: B,
        record_files: R,
        config: VerifierConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            archive,
            address_books,
            record_files,
            decoder: SignatureFileDecoder::new(config.max_signature_length),
            quorum: QuorumVerifier::new(&config),
            max_signature_files: config.max_signature_files,
        })
    }
}

impl<B, R, A> StateProofApi for StateProofService<B, R, A>
where
    B: AddressBookParser,
    R: RecordFileParser,
    A: ProofArchive,
{
    fn verify(&self, transaction_id: &str, payload: &[u8]) -> StateProofResult<bool> {
        let transaction_id = normalize_transaction_id(transaction_id);

        let bundle = self.archive.extract(payload)?;
        if bundle.signature_files.len() > self.max_signature_files {
            return Err(StateProofError::TooManySignatureFiles {
                count: bundle.signature_files.len(),
                max: self.max_signature_files,
            });
        }

        let address_book = self
            .address_books
            .parse_address_books(&bundle.address_books)?;
        let artifacts = parse_signature_files(&self.decoder, &bundle.signature_files)?;
        let record_file = self.record_files.parse_record_file(&bundle.record_file)?;

        debug!(
            transaction_id = %transaction_id,
            nodes = address_book.len(),
            signature_files = artifacts.len(),
            "State proof files parsed"
        );

        if !record_file.contains(&transaction_id) {
            return Err(StateProofError::TransactionNotFound(transaction_id));
        }

        let report = self.quorum.tally(&address_book, &artifacts)?;
        match &report.result {
            ConsensusResult::Consensus(hash) if hash.as_slice() == record_file.hash.as_slice() => {}
            other => {
                return Err(StateProofError::HashMismatch {
                    expected: hex::encode(&record_file.hash),
                    actual: other.hash().map(hex::encode).unwrap_or_default(),
                });
            }
        }

        info!(
            transaction_id = %transaction_id,
            signature_files = report.total,
            consensus_count = report.winning_count,
            threshold = report.threshold,
            "State proof verified"
        );
        Ok(true)
    }

    fn verify_quorum(
        &self,
        address_book: &AddressBook,
        artifacts: &SignatureArtifacts,
    ) -> StateProofResult<ConsensusResult> {
        self.quorum.verify_quorum(address_book, artifacts)
    }

    fn attested_hash(
        &self,
        address_book: &AddressBook,
        artifacts: &SignatureArtifacts,
    ) -> StateProofResult<Sha384Hash> {
        match self.quorum.verify_quorum(address_book, artifacts)? {
            ConsensusResult::Consensus(hash) => Ok(hash),
            ConsensusResult::NoConsensus => Err(StateProofError::NoConsensusReached),
        }
    }
}
