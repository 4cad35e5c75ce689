//! Registry service orchestrating panels, votes, and committed migrations.

use crate::errors::*;
use crate::ledger::VoteLedger;
use crate::mappings::MappingStore;
use crate::panel::PanelStore;
use crate::types::{Ballot, DelegatePanel};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{debug, info};
use walletguard_types::{MigrationKey, RegistryEvent, WalletAddress, PANEL_SIZE, QUORUM_THRESHOLD};

/// All registry state behind one lock.
///
/// Mutations touch more than one store (casting a vote reads the panel and
/// writes the ledger), so the stores share a single mutual-exclusion domain
/// instead of carrying a lock each.
#[derive(Debug, Default)]
struct RegistryState {
    panels: PanelStore,
    ledger: VoteLedger,
    mappings: MappingStore,
}

/// Quorum-gated wallet migration registry.
///
/// Owners register a panel of four delegates; once three distinct delegates
/// approve a predecessor → successor migration anyone may commit it, and
/// the committed mappings feed the resolver.
///
/// Every mutating operation takes the authenticated caller as an explicit
/// parameter and validates it before touching any state.
#[derive(Debug)]
pub struct RegistryService {
    state: RwLock<RegistryState>,
    events: Option<mpsc::UnboundedSender<RegistryEvent>>,
}

impl RegistryService {
    /// Create a registry that emits no events.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            events: None,
        }
    }

    /// Create a registry that reports state changes on the returned channel.
    pub fn with_events() -> (Self, mpsc::UnboundedReceiver<RegistryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            state: RwLock::new(RegistryState::default()),
            events: Some(tx),
        };
        (service, rx)
    }

    /// Install or replace the delegate panel for `owner`.
    ///
    /// Only the owner itself may manage its panel. Replacing a panel
    /// advances the panel epoch, which discards approvals cast under the
    /// previous panel; committed mappings are untouched.
    pub fn create_registry(
        &self,
        caller: WalletAddress,
        owner: WalletAddress,
        delegates: [WalletAddress; PANEL_SIZE],
    ) -> Result<()> {
        if caller != owner {
            return Err(RegistryError::NotOwner { caller, owner });
        }

        let panel = {
            let mut state = self.state.write();
            state.panels.install(owner, delegates)?
        };

        info!(
            "installed delegate panel for {} (epoch {})",
            owner, panel.epoch
        );
        self.emit(RegistryEvent::RegistryCreated { owner, delegates });
        Ok(())
    }

    /// Record a delegate's approval of a migration.
    ///
    /// The caller must be the delegate it votes as, and that delegate must
    /// sit on the current panel of the wallet being migrated. Re-voting is
    /// a harmless no-op that never double counts.
    pub fn cast_vote(
        &self,
        caller: WalletAddress,
        key: MigrationKey,
        voting_as: WalletAddress,
    ) -> Result<()> {
        if caller != voting_as {
            return Err(RegistryError::VoteForOther { caller, voting_as });
        }

        let newly_recorded = {
            let mut state = self.state.write();
            let epoch = match state.panels.panel(&key.from) {
                Some(panel) if panel.contains(&voting_as) => panel.epoch,
                _ => {
                    return Err(RegistryError::NotADelegate {
                        delegate: voting_as,
                        predecessor: key.from,
                    })
                }
            };
            state.ledger.record(Ballot::new(key, epoch), voting_as)
        };

        if newly_recorded {
            debug!("{} approved migration {}", voting_as, key);
        } else {
            debug!("{} re-voted on migration {}", voting_as, key);
        }
        self.emit(RegistryEvent::Voted {
            from: key.from,
            to: key.to,
            delegate: voting_as,
        });
        Ok(())
    }

    /// Number of distinct current-panel approvals recorded for `key`.
    ///
    /// Zero when no panel is installed for the predecessor.
    pub fn approval_count(&self, key: &MigrationKey) -> usize {
        let state = self.state.read();
        match state.panels.panel(&key.from) {
            Some(panel) => state.ledger.approval_count(&Ballot::new(*key, panel.epoch)),
            None => 0,
        }
    }

    /// True once the migration has reached the approval threshold.
    pub fn has_quorum(&self, key: &MigrationKey) -> bool {
        self.approval_count(key) >= QUORUM_THRESHOLD
    }

    /// Commit a migration that has reached quorum.
    ///
    /// Anyone may trigger the commit; the quorum check is the real gate.
    /// Committing again for the same predecessor overwrites the previous
    /// successor, which is how re-migration works.
    pub fn commit_migration(&self, caller: WalletAddress, key: MigrationKey) -> Result<()> {
        let replaced = {
            let mut state = self.state.write();
            let approvals = match state.panels.panel(&key.from) {
                Some(panel) => state.ledger.approval_count(&Ballot::new(key, panel.epoch)),
                None => 0,
            };
            if approvals < QUORUM_THRESHOLD {
                return Err(RegistryError::QuorumNotReached {
                    approvals,
                    required: QUORUM_THRESHOLD,
                });
            }
            state.mappings.commit(key.from, key.to)
        };

        match replaced {
            Some(previous) => info!(
                "migration {} committed by {}, replacing successor {}",
                key, caller, previous
            ),
            None => info!("migration {} committed by {}", key, caller),
        }
        self.emit(RegistryEvent::WalletMapped {
            from: key.from,
            to: key.to,
        });
        Ok(())
    }

    /// Current panel registered for `owner`.
    pub fn panel_of(&self, owner: &WalletAddress) -> Option<DelegatePanel> {
        self.state.read().panels.panel(owner).cloned()
    }

    /// Committed successor for `wallet`, if one exists.
    pub fn successor_of(&self, wallet: &WalletAddress) -> Option<WalletAddress> {
        self.state.read().mappings.successor_of(wallet)
    }

    /// Monotonic counter advanced on every committed migration.
    pub fn mapping_version(&self) -> u64 {
        self.state.read().mappings.version()
    }

    /// Run `f` against a consistent snapshot of the committed mappings.
    ///
    /// Multi-hop reads (the resolver's chain walk) go through here so the
    /// whole walk observes a single fully-committed state.
    pub fn read_mappings<R>(&self, f: impl FnOnce(&MappingStore) -> R) -> R {
        let state = self.state.read();
        f(&state.mappings)
    }

    fn emit(&self, event: RegistryEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}

impl Default for RegistryService {
    fn default() -> Self {
        Self::new()
    }
}
