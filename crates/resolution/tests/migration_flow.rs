//! End-to-end migration scenarios: panel installation, staged voting,
//! quorum-gated commits, and multi-hop resolution.

use std::sync::Arc;
use walletguard_registry::{RegistryError, RegistryService};
use walletguard_resolution::{ResolutionError, WalletResolver};
use walletguard_types::{MigrationKey, RegistryEvent, WalletAddress, PANEL_SIZE};

fn addr(tag: u8) -> WalletAddress {
    WalletAddress::new([tag; 32])
}

fn delegates() -> [WalletAddress; PANEL_SIZE] {
    [addr(1), addr(2), addr(3), addr(4)]
}

#[tokio::test]
async fn owner_migrates_twice_and_history_resolves_forward() {
    let registry = Arc::new(RegistryService::new());
    let resolver = WalletResolver::new(registry.clone());

    let owner = addr(10);
    let new_wallet = addr(11);
    let newer_wallet = addr(12);

    registry.create_registry(owner, owner, delegates()).unwrap();

    // Two approvals are not enough; the third flips quorum.
    let first = MigrationKey::new(owner, new_wallet);
    registry.cast_vote(addr(1), first, addr(1)).unwrap();
    registry.cast_vote(addr(2), first, addr(2)).unwrap();
    assert!(!registry.has_quorum(&first));

    registry.cast_vote(addr(3), first, addr(3)).unwrap();
    assert!(registry.has_quorum(&first));

    registry.commit_migration(owner, first).unwrap();
    assert_eq!(resolver.resolve(&owner).await.unwrap(), new_wallet);

    // The successor registers its own panel and migrates again.
    registry
        .create_registry(new_wallet, new_wallet, delegates())
        .unwrap();
    let second = MigrationKey::new(new_wallet, newer_wallet);
    for delegate in [addr(1), addr(2), addr(3)] {
        registry.cast_vote(delegate, second, delegate).unwrap();
    }
    registry.commit_migration(new_wallet, second).unwrap();

    // Both historical wallets resolve through the full chain.
    assert_eq!(resolver.resolve(&owner).await.unwrap(), newer_wallet);
    assert_eq!(resolver.resolve(&new_wallet).await.unwrap(), newer_wallet);

    let detailed = resolver.resolve_detailed(&owner).await.unwrap();
    assert_eq!(detailed.hops, 2);
}

#[tokio::test]
async fn undervoted_migration_never_commits() {
    let registry = Arc::new(RegistryService::new());
    let resolver = WalletResolver::new(registry.clone());

    let owner = addr(10);
    registry.create_registry(owner, owner, delegates()).unwrap();

    let key = MigrationKey::new(owner, addr(11));
    registry.cast_vote(addr(1), key, addr(1)).unwrap();
    registry.cast_vote(addr(2), key, addr(2)).unwrap();

    let err = registry.commit_migration(owner, key).unwrap_err();
    assert!(matches!(err, RegistryError::QuorumNotReached { .. }));

    // Nothing was mapped, so the owner still resolves to itself.
    assert!(registry.successor_of(&owner).is_none());
    assert_eq!(resolver.resolve(&owner).await.unwrap(), owner);
}

#[tokio::test]
async fn event_stream_reports_the_whole_flow() {
    let (registry, mut events) = RegistryService::with_events();
    let owner = addr(10);
    let new_wallet = addr(11);
    let key = MigrationKey::new(owner, new_wallet);

    registry.create_registry(owner, owner, delegates()).unwrap();
    for delegate in [addr(1), addr(2), addr(3)] {
        registry.cast_vote(delegate, key, delegate).unwrap();
    }
    registry.commit_migration(owner, key).unwrap();

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(seen.len(), 5);
    assert!(matches!(seen[0], RegistryEvent::RegistryCreated { .. }));
    assert!(matches!(
        &seen[1..4],
        [
            RegistryEvent::Voted { .. },
            RegistryEvent::Voted { .. },
            RegistryEvent::Voted { .. },
        ]
    ));
    assert_eq!(
        seen[4],
        RegistryEvent::WalletMapped {
            from: owner,
            to: new_wallet,
        }
    );
}

#[tokio::test]
async fn batch_resolution_covers_mapped_and_unmapped_wallets() {
    let registry = Arc::new(RegistryService::new());

    let owner = addr(10);
    registry.create_registry(owner, owner, delegates()).unwrap();
    let key = MigrationKey::new(owner, addr(11));
    for delegate in [addr(1), addr(2), addr(3)] {
        registry.cast_vote(delegate, key, delegate).unwrap();
    }
    registry.commit_migration(owner, key).unwrap();

    let resolver = WalletResolver::new(registry);
    let results = resolver.resolve_batch(&[owner, addr(11), addr(42)]).await;

    assert_eq!(results.len(), 3);
    assert_eq!(*results[&owner].as_ref().unwrap(), addr(11));
    assert_eq!(*results[&addr(11)].as_ref().unwrap(), addr(11));
    assert_eq!(*results[&addr(42)].as_ref().unwrap(), addr(42));
}

#[tokio::test]
async fn mutual_migrations_surface_as_a_cycle() {
    let registry = Arc::new(RegistryService::new());

    for (from, to) in [(addr(10), addr(11)), (addr(11), addr(10))] {
        registry.create_registry(from, from, delegates()).unwrap();
        let key = MigrationKey::new(from, to);
        for delegate in [addr(1), addr(2), addr(3)] {
            registry.cast_vote(delegate, key, delegate).unwrap();
        }
        registry.commit_migration(from, key).unwrap();
    }

    let resolver = WalletResolver::new(registry);
    let err = resolver.resolve(&addr(10)).await.unwrap_err();
    assert!(matches!(err, ResolutionError::CycleDetected { .. }));
}
