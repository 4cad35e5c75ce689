//! Committed wallet migration mappings.

use std::collections::HashMap;
use walletguard_types::WalletAddress;

/// Store of committed predecessor → successor mappings.
///
/// Each predecessor has at most one active successor; committing a new
/// mapping for the same predecessor overwrites the old one, which is what
/// permits re-migration. The version counter advances on every commit so
/// resolvers can tell whether a chain they cached is still current.
#[derive(Debug, Default)]
pub struct MappingStore {
    forward: HashMap<WalletAddress, WalletAddress>,
    version: u64,
}

impl MappingStore {
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            version: 0,
        }
    }

    /// Commit `from -> to`, returning the successor it replaced, if any.
    pub fn commit(&mut self, from: WalletAddress, to: WalletAddress) -> Option<WalletAddress> {
        self.version += 1;
        self.forward.insert(from, to)
    }

    /// Committed successor for `wallet`, if one exists.
    pub fn successor_of(&self, wallet: &WalletAddress) -> Option<WalletAddress> {
        self.forward.get(wallet).copied()
    }

    /// Monotonic counter advanced on every commit.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of committed mappings.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
