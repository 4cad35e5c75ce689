//! Wallet resolver following committed migration chains.

use crate::errors::*;
use crate::types::*;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::debug;
use walletguard_registry::RegistryService;
use walletguard_types::WalletAddress;

/// Resolves a wallet to its current address by walking committed
/// migrations until an unmapped wallet is reached.
///
/// Results are cached against the registry's mapping version: an entry is
/// served only while no migration has been committed since it was stored,
/// so a fresh commit invalidates every affected chain at once.
#[derive(Debug)]
pub struct WalletResolver {
    registry: Arc<RegistryService>,
    config: ResolverConfig,
    cache: Arc<RwLock<HashMap<WalletAddress, CachedResolution>>>,
}

#[derive(Debug, Clone)]
struct CachedResolution {
    resolved: ResolvedWallet,
    mapping_version: u64,
}

impl WalletResolver {
    /// Create a resolver with the default limits.
    pub fn new(registry: Arc<RegistryService>) -> Self {
        Self::with_config(registry, ResolverConfig::default())
    }

    pub fn with_config(registry: Arc<RegistryService>, config: ResolverConfig) -> Self {
        Self {
            registry,
            config,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Resolve `wallet` to the terminal address of its migration chain.
    ///
    /// Returns the wallet itself when no committed migration starts there.
    pub async fn resolve(&self, wallet: &WalletAddress) -> Result<WalletAddress> {
        Ok(self.resolve_detailed(wallet).await?.current)
    }

    /// Resolve `wallet`, also reporting how many migrations were crossed.
    pub async fn resolve_detailed(&self, wallet: &WalletAddress) -> Result<ResolvedWallet> {
        if let Some(cached) = self.get_cached(wallet, self.registry.mapping_version()) {
            return Ok(cached);
        }

        let walk = timeout(self.config.lookup_timeout, async { self.walk_chain(wallet) }).await;
        let (resolved, version) = match walk {
            Ok(result) => result?,
            Err(_) => return Err(ResolutionError::Timeout),
        };

        debug!(
            "resolved {} to {} in {} hops",
            resolved.requested, resolved.current, resolved.hops
        );
        self.store_cached(&resolved, version);
        Ok(resolved)
    }

    /// Resolve several wallets concurrently.
    pub async fn resolve_batch(
        &self,
        wallets: &[WalletAddress],
    ) -> HashMap<WalletAddress, Result<WalletAddress>> {
        let mut futures = Vec::new();
        for wallet in wallets {
            let resolver = self.clone();
            let wallet = *wallet;
            futures.push(async move { (wallet, resolver.resolve(&wallet).await) });
        }

        futures::future::join_all(futures).await.into_iter().collect()
    }

    /// Drop all cached resolutions.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Number of cached resolutions.
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Walk the chain under one mappings snapshot, so a commit landing
    /// mid-walk cannot produce a terminal that never existed.
    fn walk_chain(&self, start: &WalletAddress) -> Result<(ResolvedWallet, u64)> {
        self.registry.read_mappings(|mappings| {
            let mut visited = HashSet::new();
            let mut current = *start;
            let mut hops = 0usize;
            visited.insert(current);

            while let Some(next) = mappings.successor_of(&current) {
                if hops >= self.config.max_hops {
                    return Err(ResolutionError::ChainTooLong {
                        start: *start,
                        max_hops: self.config.max_hops,
                    });
                }
                if !visited.insert(next) {
                    return Err(ResolutionError::CycleDetected {
                        start: *start,
                        wallet: next,
                    });
                }
                current = next;
                hops += 1;
            }

            Ok((
                ResolvedWallet {
                    requested: *start,
                    current,
                    hops,
                },
                mappings.version(),
            ))
        })
    }

    fn get_cached(&self, wallet: &WalletAddress, version: u64) -> Option<ResolvedWallet> {
        let cache = self.cache.read();
        cache
            .get(wallet)
            .filter(|entry| entry.mapping_version == version)
            .map(|entry| entry.resolved.clone())
    }

    fn store_cached(&self, resolved: &ResolvedWallet, version: u64) {
        let mut cache = self.cache.write();
        cache.insert(
            resolved.requested,
            CachedResolution {
                resolved: resolved.clone(),
                mapping_version: version,
            },
        );
    }
}

impl Clone for WalletResolver {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            config: self.config.clone(),
            cache: self.cache.clone(),
        }
    }
}
