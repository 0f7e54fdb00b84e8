//! # Session Messages
//!
//! Message types exchanged between a [`SessionClient`](crate::SessionClient) and its
//! [`SessionActor`](crate::SessionActor).

use crate::error::FrameworkError;
use crate::state::SessionState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal request sent to the session actor.
///
/// There are only two kinds of request: apply an event, or read a snapshot. Every
/// domain operation is expressed as a [`SessionState::Event`] variant.
#[derive(Debug)]
pub enum SessionRequest<S: SessionState> {
    Event {
        event: S::Event,
        respond_to: Response<S::Outcome>,
    },
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
}
