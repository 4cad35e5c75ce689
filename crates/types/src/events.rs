use crate::address::WalletAddress;
use crate::migration::PANEL_SIZE;
use serde::{Deserialize, Serialize};

/// Events emitted by the registry after a state change commits.
///
/// Delivery is best-effort: the registry drops events when no subscriber
/// is attached or the receiver has gone away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A delegate panel was installed or replaced for `owner`.
    RegistryCreated {
        owner: WalletAddress,
        delegates: [WalletAddress; PANEL_SIZE],
    },
    /// A delegate approved the migration `from -> to`.
    Voted {
        from: WalletAddress,
        to: WalletAddress,
        delegate: WalletAddress,
    },
    /// A migration reached quorum and its mapping was committed.
    WalletMapped {
        from: WalletAddress,
        to: WalletAddress,
    },
}
