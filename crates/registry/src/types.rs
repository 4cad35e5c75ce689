//! Types for the walletguard registry.

use serde::{Deserialize, Serialize};
use walletguard_types::{MigrationKey, WalletAddress, PANEL_SIZE};

/// Delegate panel registered for an owner wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatePanel {
    /// Owner wallet the panel approves migrations for.
    pub owner: WalletAddress,
    /// The fixed set of approvers, in registration order.
    pub delegates: [WalletAddress; PANEL_SIZE],
    /// Advances every time the owner replaces the panel. Ballots are scoped
    /// to the epoch they were cast under, so a replacement discards any
    /// pending approvals.
    pub epoch: u64,
}

impl DelegatePanel {
    /// Whether `delegate` sits on this panel.
    pub fn contains(&self, delegate: &WalletAddress) -> bool {
        self.delegates.iter().any(|d| d == delegate)
    }
}

/// A migration proposal scoped to the panel epoch it is voted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ballot {
    pub key: MigrationKey,
    pub epoch: u64,
}

impl Ballot {
    pub fn new(key: MigrationKey, epoch: u64) -> Self {
        Self { key, epoch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> WalletAddress {
        WalletAddress::new([tag; 32])
    }

    #[test]
    fn panel_membership() {
        let panel = DelegatePanel {
            owner: addr(0),
            delegates: [addr(1), addr(2), addr(3), addr(4)],
            epoch: 0,
        };
        assert!(panel.contains(&addr(3)));
        assert!(!panel.contains(&addr(9)));
    }

    #[test]
    fn ballots_differ_across_epochs() {
        let key = MigrationKey::new(addr(0), addr(9));
        assert_ne!(Ballot::new(key, 0), Ballot::new(key, 1));
    }
}
