//! # Catalog Actor
//!
//! Runs a [`CatalogSession`] inside a [`SessionActor`] so the rendering layer can feed it
//! user interactions as [`CatalogEvent`]s.
//!
//! ## Structure
//!
//! - [`entity`] - [`SessionState`](session_framework::SessionState) implementation for [`CatalogSession`]
//! - [`events`] - [`CatalogEvent`] and [`CatalogOutcome`]
//! - [`new()`] - Factory function that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use product_catalog::catalog_actor::{self, CatalogEvent};
//! use product_catalog::clients::CatalogClient;
//! use product_catalog::ids::UuidIds;
//! use product_catalog::seed::Seed;
//! use product_catalog::session::CatalogSession;
//! use product_catalog::validation::ValidationRules;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = CatalogSession::new(Seed::embedded()?, ValidationRules::default())?;
//!     let (actor, generic_client) = catalog_actor::new(session, 32);
//!     let client = CatalogClient::new(generic_client);
//!
//!     let handle = tokio::spawn(actor.run(Arc::new(UuidIds)));
//!
//!     client.open_form().await?;
//!     client.cancel_form().await?;
//!
//!     drop(client);
//!     let final_session = handle.await?;
//!     assert!(!final_session.is_open());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod events;

pub use events::*;

use crate::session::CatalogSession;
use session_framework::{SessionActor, SessionClient};

/// Creates a new catalog actor and its client.
pub fn new(
    session: CatalogSession,
    mailbox_capacity: usize,
) -> (SessionActor<CatalogSession>, SessionClient<CatalogSession>) {
    SessionActor::new(session, mailbox_capacity)
}
