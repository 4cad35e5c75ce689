//! Error types for the walletguard registry.

use thiserror::Error;
use walletguard_types::WalletAddress;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("caller {caller} is not the owner {owner}")]
    NotOwner {
        caller: WalletAddress,
        owner: WalletAddress,
    },

    #[error("caller {caller} cannot vote as {voting_as}")]
    VoteForOther {
        caller: WalletAddress,
        voting_as: WalletAddress,
    },

    #[error("{delegate} is not an authorized delegate for {predecessor}")]
    NotADelegate {
        delegate: WalletAddress,
        predecessor: WalletAddress,
    },

    #[error("delegate {delegate} appears more than once on the panel")]
    DuplicateDelegate { delegate: WalletAddress },

    #[error("migration needs {required} delegate approvals, has {approvals}")]
    QuorumNotReached { approvals: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
