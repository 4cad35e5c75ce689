//! Core types for the walletguard migration registry.
//!
//! Defines the wallet address format, the migration key scoping a single
//! predecessor → successor proposal, the panel/quorum constants, and the
//! events the registry emits when state changes commit.

pub mod address;
pub mod events;
pub mod migration;

pub use address::*;
pub use events::*;
pub use migration::*;
