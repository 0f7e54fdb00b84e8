//! # Session Client
//!
//! The generic client for talking to a [`SessionActor`](crate::SessionActor).

use crate::error::FrameworkError;
use crate::message::SessionRequest;
use crate::state::SessionState;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for sending requests to a `SessionActor`.
///
/// Holds only the mailbox sender, so cloning is cheap. The actor stops once every clone
/// has been dropped.
pub struct SessionClient<S: SessionState> {
    sender: mpsc::Sender<SessionRequest<S>>,
}

impl<S: SessionState> Clone for SessionClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: SessionState> SessionClient<S> {
    pub fn new(sender: mpsc::Sender<SessionRequest<S>>) -> Self {
        Self { sender }
    }

    /// Sends one event and waits for its outcome.
    pub async fn dispatch(&self, event: S::Event) -> Result<S::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Event { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Reads a snapshot of the current state.
    pub async fn snapshot(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns `true` once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
