//! # Session Lifecycle
//!
//! Starts the catalog session actor, hands out its client, and shuts it down.
//!
//! ## Startup
//!
//! [`CatalogSystem::start`] loads the seed (from `CATALOG_SEED_PATH` or the embedded file),
//! builds the [`CatalogSession`](crate::session::CatalogSession) with the configured
//! validation rules, and spawns the actor with a UUID id generator as its run context.
//! Tests that need predictable ids use [`CatalogSystem::with_parts`] instead.
//!
//! ## Shutdown
//!
//! The actor stops when every client has been dropped. [`CatalogSystem::shutdown`] drops
//! the system's own client, awaits the actor task, and returns the final session so callers
//! can inspect what was committed.
//!
//! Clones of `catalog_client` handed out elsewhere keep the actor alive; drop them first.

pub mod catalog_system;

pub use catalog_system::*;
