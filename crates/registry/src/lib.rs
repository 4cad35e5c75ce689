//! Quorum-gated wallet migration registry.
//!
//! An owner wallet registers a fixed panel of four delegates. Migrating the
//! owner to a successor wallet requires approvals from three distinct
//! delegates before the mapping commits. Committed mappings are what the
//! resolution crate follows to find a wallet's current address.

pub mod errors;
pub mod ledger;
pub mod mappings;
pub mod panel;
pub mod service;
pub mod types;

pub use errors::*;
pub use ledger::VoteLedger;
pub use mappings::MappingStore;
pub use panel::PanelStore;
pub use service::RegistryService;
pub use types::*;
