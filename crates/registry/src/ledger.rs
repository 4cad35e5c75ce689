//! Vote ledger for migration proposals.

use crate::types::Ballot;
use std::collections::{HashMap, HashSet};
use walletguard_types::{WalletAddress, QUORUM_THRESHOLD};

/// Records which delegates have approved each migration ballot.
///
/// Approvals are idempotent: a delegate voting on the same ballot twice
/// leaves the count unchanged. Ballots carry the panel epoch they were
/// cast under, so approvals from a retired panel never count toward the
/// current one.
#[derive(Debug, Default)]
pub struct VoteLedger {
    approvals: HashMap<Ballot, HashSet<WalletAddress>>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self {
            approvals: HashMap::new(),
        }
    }

    /// Record an approval. Returns `false` when the delegate had already
    /// voted on this ballot.
    pub fn record(&mut self, ballot: Ballot, delegate: WalletAddress) -> bool {
        self.approvals.entry(ballot).or_default().insert(delegate)
    }

    /// Number of distinct delegates that approved `ballot`.
    pub fn approval_count(&self, ballot: &Ballot) -> usize {
        self.approvals.get(ballot).map(|set| set.len()).unwrap_or(0)
    }

    /// True once enough distinct delegates have approved.
    pub fn has_quorum(&self, ballot: &Ballot) -> bool {
        self.approval_count(ballot) >= QUORUM_THRESHOLD
    }
}
