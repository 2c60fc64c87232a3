//! # Verifier Configuration
//!
//! All limits have defaults matching the ledger's published behaviour.

use super::constants::SHA384_WITH_RSA_MAX_LENGTH;
use thiserror::Error;

/// Threshold a winning hash must reach, given `n` signature files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuorumRule {
    /// `floor(n / 3)`
    #[default]
    OneThirdFloor,
    /// `floor(n / 3) + 1`, strictly more than one third
    StrictOneThird,
}

impl QuorumRule {
    pub fn threshold(self, total: usize) -> usize {
        match self {
            QuorumRule::OneThirdFloor => total / 3,
            QuorumRule::StrictOneThird => total / 3 + 1,
        }
    }
}

/// What to do with a signature file whose node has no public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownSignerPolicy {
    /// Skip the node; it still counts toward the total
    #[default]
    Skip,
    /// Fail the whole verification
    Reject,
}

/// State proof verifier configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    pub quorum_rule: QuorumRule,
    pub unknown_signer_policy: UnknownSignerPolicy,
    /// Verify node signatures on the rayon pool
    pub parallel_verification: bool,
    /// Upper bound on signature files per proof
    pub max_signature_files: usize,
    /// Upper bound on a decoded signature length
    pub max_signature_length: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            quorum_rule: QuorumRule::OneThirdFloor,
            unknown_signer_policy: UnknownSignerPolicy::Skip,
            parallel_verification: true,
            max_signature_files: 1024,
            max_signature_length: SHA384_WITH_RSA_MAX_LENGTH,
        }
    }
}

impl VerifierConfig {
    /// Reject limits that would make every proof fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_signature_files == 0 {
            return Err(ConfigError::NoSignatureFilesAllowed);
        }
        if self.max_signature_length == 0 || self.max_signature_length > SHA384_WITH_RSA_MAX_LENGTH
        {
            return Err(ConfigError::InvalidSignatureLength {
                value: self.max_signature_length,
                max: SHA384_WITH_RSA_MAX_LENGTH,
            });
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_signature_files must be at least 1")]
    NoSignatureFilesAllowed,

    #[error("max_signature_length {value} outside of [1, {max}]")]
    InvalidSignatureLength { value: usize, max: usize },
}
