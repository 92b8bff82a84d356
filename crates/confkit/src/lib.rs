//! # confkit
//!
//! Per-application configuration store for desktop tools.
//!
//! This crate provides:
//! - Resolution of a per-user configuration directory (`<home>/.config/<app>`)
//! - Loading of named YAML configuration files from that directory
//! - Fallback copy of an application's shipped default file when a user
//!   file is missing
//! - Shaping of a loaded document into strongly-typed records
//! - One-time seeding of a fresh user configuration library from bundled
//!   defaults
//!
//! ## Modules
//!
//! - [`store`]: the [`ConfigStore`] façade — path resolution, loading,
//!   fallback copy
//! - [`seed`]: first-run seeding from bundled `configuration/` assets
//!
//! All I/O is synchronous and blocking; every load re-reads from disk.
//! The store assumes exclusive single-process access to the user
//! configuration directory — concurrent processes racing on
//! [`ConfigStore::replace`] or [`ConfigStore::reset`] are not guarded.

pub mod seed;
pub mod store;

// Re-export everything callers need at the crate root
pub use seed::error::{SeedError, SeedResult};
pub use store::error::{StoreError, StoreResult};
pub use store::ConfigStore;
