//! # Quorum Verification
//!
//! Checks every node's signature over the hash it attests to, buckets nodes
//! by that hash and decides whether one bucket reaches the threshold.
//!
//! ## Rules
//!
//! - Nodes are evaluated in lexicographic node id order.
//! - A node without a public key is skipped (or rejected, per policy) but
//!   still counts toward the total number of signature files.
//! - Any bad key or signature from a known node fails the whole call.
//! - Only hashes attested by more than one node can win. The winner is the
//!   first hash to reach the highest count; a later hash reaching the same
//!   count does not replace it.
//! - The winner holds if its count is at least the configured threshold.

use super::config::{QuorumRule, UnknownSignerPolicy, VerifierConfig};
use super::crypto::NodePublicKey;
use super::entities::{
    AddressBook, ConsensusResult, NodeId, Sha384Hash, SignatureArtifact, SignatureArtifacts,
};
use super::errors::{StateProofError, StateProofResult};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Result of checking one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeCheck<'a> {
    Verified(&'a Sha384Hash),
    Skipped,
}

/// Tally details behind a [`ConsensusResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuorumReport {
    pub result: ConsensusResult,
    /// Number of signature files, including skipped nodes
    pub total: usize,
    pub threshold: usize,
    /// Nodes attesting to the leading hash (0 if no hash had two)
    pub winning_count: usize,
    pub verified: usize,
    pub skipped: Vec<NodeId>,
}

/// Signature quorum verifier.
#[derive(Debug, Clone)]
pub struct QuorumVerifier {
    quorum_rule: QuorumRule,
    unknown_signer_policy: UnknownSignerPolicy,
    parallel: bool,
    max_signature_files: usize,
}

impl Default for QuorumVerifier {
    fn default() -> Self {
        Self::new(&VerifierConfig::default())
    }
}

impl QuorumVerifier {
    pub fn new(config: &VerifierConfig) -> Self {
        Self {
            quorum_rule: config.quorum_rule,
            unknown_signer_policy: config.unknown_signer_policy,
            parallel: config.parallel_verification,
            max_signature_files: config.max_signature_files,
        }
    }

    /// Verify all signatures and compute the consensus hash.
    pub fn verify_quorum(
        &self,
        address_book: &AddressBook,
        artifacts: &SignatureArtifacts,
    ) -> StateProofResult<ConsensusResult> {
        self.tally(address_book, artifacts).map(|report| report.result)
    }

    /// Like [`verify_quorum`](Self::verify_quorum), with tally details.
    pub fn tally(
        &self,
        address_book: &AddressBook,
        artifacts: &SignatureArtifacts,
    ) -> StateProofResult<QuorumReport> {
        if artifacts.len() > self.max_signature_files {
            return Err(StateProofError::TooManySignatureFiles {
                count: artifacts.len(),
                max: self.max_signature_files,
            });
        }

        if self.parallel {
            let nodes: Vec<(&NodeId, &SignatureArtifact)> = artifacts.iter().collect();
            let checks = checks_until_first_failure(&nodes, |&(node, artifact)| {
                self.check_node(address_book, node, artifact).map(|check| (node, check))
            });
            self.count(artifacts.len(), checks)
        } else {
            let checks = artifacts.iter().map(|(node, artifact)| {
                self.check_node(address_book, node, artifact).map(|check| (node, check))
            });
            self.count(artifacts.len(), checks)
        }
    }

    fn check_node<'a>(
        &self,
        address_book: &AddressBook,
        node: &NodeId,
        artifact: &'a SignatureArtifact,
    ) -> StateProofResult<NodeCheck<'a>> {
        let Some(key_hex) = address_book.get(node) else {
            return match self.unknown_signer_policy {
                UnknownSignerPolicy::Skip => Ok(NodeCheck::Skipped),
                UnknownSignerPolicy::Reject => Err(StateProofError::UnknownNode(node.clone())),
            };
        };

        let key = NodePublicKey::from_hex(key_hex)
            .ok_or_else(|| StateProofError::MalformedPublicKey(node.clone()))?;

        let hash = artifact
            .content_hash()
            .ok_or_else(|| StateProofError::MissingContentHash(node.clone()))?;

        if !key.verify_hash(hash, artifact.signature()) {
            return Err(StateProofError::SignatureInvalid(node.clone()));
        }

        if let Some((metadata_hash, metadata_signature)) = artifact.metadata() {
            if !key.verify_hash(metadata_hash, metadata_signature) {
                return Err(StateProofError::MetadataSignatureInvalid(node.clone()));
            }
        }

        Ok(NodeCheck::Verified(hash))
    }

    fn count<'a, I>(&self, total: usize, checks: I) -> StateProofResult<QuorumReport>
    where
        I: IntoIterator<Item = StateProofResult<(&'a NodeId, NodeCheck<'a>)>>,
    {
        let mut buckets: HashMap<&Sha384Hash, usize> = HashMap::new();
        let mut consensus_hash: Option<&Sha384Hash> = None;
        let mut max_count = 0;
        let mut verified = 0;
        let mut skipped = Vec::new();

        for check in checks {
            match check? {
                (node, NodeCheck::Skipped) => {
                    warn!(node = %node, "No public key for signer, skipping");
                    skipped.push(node.clone());
                }
                (node, NodeCheck::Verified(hash)) => {
                    debug!(node = %node, hash = %hex::encode(hash), "Verified node signature");
                    verified += 1;

                    let count = buckets.entry(hash).or_insert(0);
                    *count += 1;
                    if *count > 1 && *count > max_count {
                        max_count = *count;
                        consensus_hash = Some(hash);
                    }
                }
            }
        }

        let threshold = self.quorum_rule.threshold(total);
        let result = match consensus_hash {
            Some(hash) if max_count >= threshold => ConsensusResult::Consensus(*hash),
            _ => ConsensusResult::NoConsensus,
        };

        debug!(
            total,
            threshold,
            winning_count = max_count,
            distinct_hashes = buckets.len(),
            "Quorum tally complete"
        );

        Ok(QuorumReport {
            result,
            total,
            threshold,
            winning_count: max_count,
            verified,
            skipped,
        })
    }
}

/// Run `check` over `items` on the rayon pool.
///
/// Returns results in input order, ending at the first failure. Once an item
/// fails, items after it are not checked; items before it always are, so the
/// reported failure is the same as in a sequential pass.
fn checks_until_first_failure<T, U, F>(items: &[T], check: F) -> Vec<StateProofResult<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> StateProofResult<U> + Sync,
{
    let first_failure = AtomicUsize::new(usize::MAX);

    let results: Vec<Option<StateProofResult<U>>> = items
        .par_iter()
        .enumerate()
        .map(|(index, item)| {
            if index > first_failure.load(Ordering::Relaxed) {
                return None;
            }
            let result = check(item);
            if result.is_err() {
                first_failure.fetch_min(index, Ordering::Relaxed);
            }
            Some(result)
        })
        .collect();

    // An unchecked slot always follows a recorded failure
    let mut ordered = Vec::with_capacity(results.len());
    for result in results.into_iter().map_while(|result| result) {
        let failed = result.is_err();
        ordered.push(result);
        if failed {
            break;
        }
    }
    ordered
}
