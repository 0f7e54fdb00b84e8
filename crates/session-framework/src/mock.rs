//! # Mock Sessions & Testing Guide
//!
//! `MockSession<S>` hands out a real [`SessionClient<S>`] whose requests are answered from
//! a queue of expectations instead of by a running state. Use it to test the code *around*
//! a client (error mapping, outcome unpacking) without building a real session.
//!
//! | Feature | MockSession | Real Actor |
//! |---------|-------------|------------|
//! | **State** | None, answers are scripted | Real state transitions |
//! | **Determinism** | Fully deterministic | Fully deterministic (one task) |
//! | **Error injection** | Easy (`return_err`) | Needs a state that fails |
//! | **Use case** | Client wrappers | The state itself, full flows |
//!
//! ## Fluent API
//!
//! ```rust
//! use async_trait::async_trait;
//! use session_framework::mock::MockSession;
//! use session_framework::{FrameworkError, SessionState};
//!
//! #[derive(Debug, Default)] struct Lamp { on: bool }
//! #[derive(Debug, Clone, PartialEq)] enum LampEvent { Flip }
//! #[derive(Debug, thiserror::Error)] #[error("lamp error")] struct LampError;
//!
//! #[async_trait]
//! impl SessionState for Lamp {
//!     type Event = LampEvent; type Outcome = bool; type Snapshot = bool;
//!     type Context = (); type Error = LampError;
//!     async fn handle_event(&mut self, _: LampEvent, _: &()) -> Result<bool, LampError> {
//!         self.on = !self.on;
//!         Ok(self.on)
//!     }
//!     fn snapshot(&self) -> bool { self.on }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockSession::<Lamp>::new();
//!     mock.expect_event().return_ok(true);
//!     mock.expect_event().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.dispatch(LampEvent::Flip).await.unwrap());
//!     assert!(matches!(
//!         client.dispatch(LampEvent::Flip).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!
//!     mock.verify();
//!     assert_eq!(mock.received(), vec![LampEvent::Flip, LampEvent::Flip]);
//! }
//! ```
//!
//! ## Low-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw mailbox receiver, and
//! [`expect_event`] / [`expect_snapshot`] pull the next request off it so a test can
//! inspect the payload and answer through the responder by hand.

use crate::client::SessionClient;
use crate::error::FrameworkError;
use crate::message::{Response, SessionRequest};
use crate::state::SessionState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted answer for the next request.
enum Expectation<S: SessionState> {
    Event {
        response: Result<S::Outcome, FrameworkError>,
    },
    Snapshot {
        response: Result<S::Snapshot, FrameworkError>,
    },
}

type ExpectationQueue<S> = Arc<Mutex<VecDeque<Expectation<S>>>>;

/// A mock session with expectation tracking.
///
/// Requests are matched against expectations in FIFO order. A request that does not
/// match the next expectation panics the background task, which the client observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockSession<S: SessionState> {
    client: SessionClient<S>,
    expectations: ExpectationQueue<S>,
    received: Arc<Mutex<Vec<S::Event>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: SessionState> Default for MockSession<S>
where
    S::Event: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SessionState> MockSession<S>
where
    S::Event: Clone,
{
    /// Creates a new mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<S>>(100);
        let expectations: ExpectationQueue<S> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        SessionRequest::Event { event, respond_to },
                        Some(Expectation::Event { response }),
                    ) => {
                        received_clone
                            .lock()
                            .expect("mock received lock poisoned")
                            .push(event);
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> SessionClient<S> {
        self.client.clone()
    }

    /// Expects an event request.
    pub fn expect_event(&mut self) -> EventExpectationBuilder<S> {
        EventExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a snapshot request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Events received so far, in arrival order.
    pub fn received(&self) -> Vec<S::Event> {
        self.received
            .lock()
            .expect("mock received lock poisoned")
            .clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("mock expectations lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for event expectations.
pub struct EventExpectationBuilder<S: SessionState> {
    expectations: ExpectationQueue<S>,
}

impl<S: SessionState> EventExpectationBuilder<S> {
    pub fn return_ok(self, outcome: S::Outcome) {
        self.push(Ok(outcome));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Outcome, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations lock poisoned")
            .push_back(Expectation::Event { response });
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<S: SessionState> {
    expectations: ExpectationQueue<S>,
}

impl<S: SessionState> SnapshotExpectationBuilder<S> {
    pub fn return_ok(self, snapshot: S::Snapshot) {
        self.push(Ok(snapshot));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<S::Snapshot, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations lock poisoned")
            .push_back(Expectation::Snapshot { response });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver behind it.
pub fn create_mock_client<S: SessionState>(
    buffer_size: usize,
) -> (SessionClient<S>, mpsc::Receiver<SessionRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an event.
pub async fn expect_event<S: SessionState>(
    receiver: &mut mpsc::Receiver<SessionRequest<S>>,
) -> Option<(S::Event, Response<S::Outcome>)> {
    match receiver.recv().await {
        Some(SessionRequest::Event { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a snapshot read.
pub async fn expect_snapshot<S: SessionState>(
    receiver: &mut mpsc::Receiver<SessionRequest<S>>,
) -> Option<Response<S::Snapshot>> {
    match receiver.recv().await {
        Some(SessionRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
