//! Delegate panel storage.

use crate::errors::*;
use crate::types::DelegatePanel;
use std::collections::HashMap;
use walletguard_types::{WalletAddress, PANEL_SIZE};

/// Stores the delegate panel registered for each owner wallet.
///
/// A panel exists only after its owner installs one. Re-installation
/// replaces the previous panel wholesale and advances its epoch; panels
/// are never deleted.
#[derive(Debug, Default)]
pub struct PanelStore {
    panels: HashMap<WalletAddress, DelegatePanel>,
}

impl PanelStore {
    pub fn new() -> Self {
        Self {
            panels: HashMap::new(),
        }
    }

    /// Install or replace the panel for `owner`.
    ///
    /// Panels listing the same delegate twice are rejected: a repeated
    /// identity would let fewer than the required distinct approvers reach
    /// quorum.
    pub fn install(
        &mut self,
        owner: WalletAddress,
        delegates: [WalletAddress; PANEL_SIZE],
    ) -> Result<DelegatePanel> {
        for (i, delegate) in delegates.iter().enumerate() {
            if delegates[..i].contains(delegate) {
                return Err(RegistryError::DuplicateDelegate {
                    delegate: *delegate,
                });
            }
        }

        let epoch = self
            .panels
            .get(&owner)
            .map(|previous| previous.epoch + 1)
            .unwrap_or(0);

        let panel = DelegatePanel {
            owner,
            delegates,
            epoch,
        };
        self.panels.insert(owner, panel.clone());
        Ok(panel)
    }

    /// Current panel for `owner`, if one was installed.
    pub fn panel(&self, owner: &WalletAddress) -> Option<&DelegatePanel> {
        self.panels.get(owner)
    }

    /// Number of owners with an installed panel.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
