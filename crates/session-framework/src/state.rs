//! # SessionState Trait
//!
//! The `SessionState` trait is the contract a piece of UI-session state implements to be
//! owned by a [`SessionActor`](crate::SessionActor). The actor holds exactly one value of
//! the state type and feeds it events one at a time, so the state never needs a lock.
//!
//! Associated types keep every message strongly typed: a catalog session only accepts
//! catalog events, and its outcomes and snapshots come back with their concrete types.

use async_trait::async_trait;
use std::fmt::Debug;

/// State that can be driven by a [`SessionActor`](crate::SessionActor).
///
/// # Context
/// `Context` carries collaborators that are bound when the actor starts (`run(context)`)
/// rather than when it is built, such as an id generator. Use `()` when nothing is needed.
#[async_trait]
pub trait SessionState: Send + Sync + 'static {
    /// Input applied to the state (one user interaction, for example).
    type Event: Send + Sync + Debug;

    /// What a single event produced.
    type Outcome: Send + Sync + Debug;

    /// Read-only view handed to renderers.
    type Snapshot: Send + Sync + Debug;

    /// Collaborators injected into every event.
    type Context: Send + Sync;

    /// The error type for rejected events.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies one event. Events are delivered strictly in arrival order and each one
    /// runs to completion before the next is taken from the mailbox.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Builds a snapshot of the current state.
    fn snapshot(&self) -> Self::Snapshot;
}
