//! Error types for wallet resolution.

use thiserror::Error;
use walletguard_types::WalletAddress;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("migration chain starting at {start} loops back to {wallet}")]
    CycleDetected {
        start: WalletAddress,
        wallet: WalletAddress,
    },

    #[error("migration chain starting at {start} exceeds {max_hops} hops")]
    ChainTooLong {
        start: WalletAddress,
        max_hops: usize,
    },

    #[error("wallet resolution timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, ResolutionError>;
