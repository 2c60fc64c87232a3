//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the verifier.

use crate::domain::entities::{AddressBook, ConsensusResult, Sha384Hash, SignatureArtifacts};
use crate::domain::errors::StateProofResult;

/// Primary State Proof API.
///
/// Implementations must be thread-safe (`Send + Sync`). Every call is
/// independent; nothing is cached between calls.
pub trait StateProofApi: Send + Sync {
    /// Verify that `transaction_id` is included in the record file of
    /// `payload` and that the record file hash reached signature quorum.
    ///
    /// `transaction_id` may use the ledger's external form
    /// (`0.0.100@1614556800.123456789` or `0.0.100-1614556800-123456789`).
    ///
    /// # Errors
    /// Returns the first failure encountered; there is no `Ok(false)`.
    fn verify(&self, transaction_id: &str, payload: &[u8]) -> StateProofResult<bool>;

    /// Verify every node signature and compute the consensus hash.
    fn verify_quorum(
        &self,
        address_book: &AddressBook,
        artifacts: &SignatureArtifacts,
    ) -> StateProofResult<ConsensusResult>;

    /// Like [`verify_quorum`](Self::verify_quorum), failing with
    /// `NoConsensusReached` instead of returning `NoConsensus`.
    fn attested_hash(
        &self,
        address_book: &AddressBook,
        artifacts: &SignatureArtifacts,
    ) -> StateProofResult<Sha384Hash>;
}
