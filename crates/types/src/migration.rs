use crate::address::WalletAddress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of delegates on every panel.
pub const PANEL_SIZE: usize = 4;

/// Distinct delegate approvals required before a migration commits.
pub const QUORUM_THRESHOLD: usize = 3;

/// Ordered predecessor → successor pair scoping a single migration proposal.
///
/// Votes and the committed mapping are both keyed by this pair, so
/// proposals for different successors of the same wallet accumulate
/// approvals independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MigrationKey {
    /// Wallet being migrated away from.
    pub from: WalletAddress,
    /// Proposed successor wallet.
    pub to: WalletAddress,
}

impl MigrationKey {
    /// Create a migration key.
    pub fn new(from: WalletAddress, to: WalletAddress) -> Self {
        Self { from, to }
    }

    /// True when the proposal maps a wallet onto itself.
    pub fn is_self_referential(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for MigrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_referential_detected() {
        let a = WalletAddress::new([1u8; 32]);
        let b = WalletAddress::new([2u8; 32]);
        assert!(MigrationKey::new(a, a).is_self_referential());
        assert!(!MigrationKey::new(a, b).is_self_referential());
    }

    #[test]
    fn keys_are_ordered_pairs() {
        let a = WalletAddress::new([1u8; 32]);
        let b = WalletAddress::new([2u8; 32]);
        assert_ne!(MigrationKey::new(a, b), MigrationKey::new(b, a));
    }
}
