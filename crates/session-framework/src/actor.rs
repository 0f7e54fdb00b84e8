//! # Session Actor
//!
//! The `SessionActor` owns one [`SessionState`] value and the receiving end of its mailbox.
//! It is the event loop of an interactive session: requests are handled one at a time, in
//! order, and each runs to completion before the next is read.

use crate::client::SessionClient;
use crate::error::FrameworkError;
use crate::message::SessionRequest;
use crate::state::SessionState;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a session's state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SessionActor::new(state, capacity)` returns the actor and a client.
/// 2.  **Run**: spawn `actor.run(context)` on the tokio runtime.
/// 3.  **Use**: send events through the (cloneable) client.
/// 4.  **Stop**: drop every client; `run` returns the final state.
///
/// ```rust
/// use async_trait::async_trait;
/// use session_framework::{SessionActor, SessionState};
///
/// #[derive(Debug, Default)]
/// struct Counter { value: u32 }
///
/// #[derive(Debug)]
/// enum CounterEvent { Add(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// #[async_trait]
/// impl SessionState for Counter {
///     type Event = CounterEvent;
///     type Outcome = u32;
///     type Snapshot = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_event(&mut self, event: CounterEvent, _: &()) -> Result<u32, CounterError> {
///         match event { CounterEvent::Add(n) => { self.value += n; Ok(self.value) } }
///     }
///
///     fn snapshot(&self) -> u32 { self.value }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SessionActor::new(Counter::default(), 8);
///     let handle = tokio::spawn(actor.run(()));
///
///     assert_eq!(client.dispatch(CounterEvent::Add(2)).await.unwrap(), 2);
///     drop(client);
///     assert_eq!(handle.await.unwrap().value, 2);
/// }
/// ```
pub struct SessionActor<S: SessionState> {
    receiver: mpsc::Receiver<SessionRequest<S>>,
    state: S,
    processed: u64,
}

impl<S: SessionState> SessionActor<S> {
    /// Creates a new `SessionActor` around `state` and its associated `SessionClient`.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait when it is full.
    pub fn new(state: S, buffer_size: usize) -> (Self, SessionClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state,
            processed: 0,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped, then hands back the
    /// final state.
    pub async fn run(mut self, context: S::Context) -> S {
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Session started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Event { event, respond_to } => {
                    debug!(state_type, ?event, "Event");
                    let result = self
                        .state
                        .handle_event(event, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    self.processed += 1;
                    match &result {
                        Ok(outcome) => info!(state_type, ?outcome, "Event applied"),
                        Err(e) => warn!(state_type, error = %e, "Event rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        info!(state_type, processed = self.processed, "Shutdown");
        self.state
    }
}
