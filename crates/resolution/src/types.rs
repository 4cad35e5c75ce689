//! Types for wallet resolution.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use walletguard_types::WalletAddress;

/// Limits applied while walking a migration chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum committed migrations to cross before giving up.
    pub max_hops: usize,
    /// Budget for a single lookup.
    pub lookup_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_hops: 64,
            lookup_timeout: Duration::from_secs(5),
        }
    }
}

/// Outcome of following a migration chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedWallet {
    /// Wallet the lookup started from.
    pub requested: WalletAddress,
    /// Terminal wallet with no further committed migration.
    pub current: WalletAddress,
    /// Committed migrations crossed; zero when `requested` was already
    /// terminal.
    pub hops: usize,
}
