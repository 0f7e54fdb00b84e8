//! # DomainClient Trait
//!
//! Common interface for domain-specific clients built on top of a generic
//! [`SessionClient`]. Implementors supply the inner client and an error mapping, and get
//! `dispatch` and `snapshot` with domain errors for free.
use crate::{FrameworkError, SessionClient, SessionState};
use async_trait::async_trait;

/// Trait for domain clients that wrap a [`SessionClient`].
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use session_framework::{DomainClient, FrameworkError, SessionClient, SessionState};
///
/// #[derive(Debug, Default)]
/// struct Tally { hits: u32 }
/// #[derive(Debug)] struct Hit;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TallyError(String);
///
/// #[async_trait]
/// impl SessionState for Tally {
///     type Event = Hit; type Outcome = u32; type Snapshot = u32;
///     type Context = (); type Error = TallyError;
///     async fn handle_event(&mut self, _: Hit, _: &()) -> Result<u32, TallyError> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
///     fn snapshot(&self) -> u32 { self.hits }
/// }
///
/// struct TallyClient { inner: SessionClient<Tally> }
///
/// #[async_trait]
/// impl DomainClient<Tally> for TallyClient {
///     type Error = TallyError;
///     fn inner(&self) -> &SessionClient<Tally> { &self.inner }
///     fn map_error(e: FrameworkError) -> TallyError { TallyError(e.to_string()) }
/// }
///
/// async fn usage(client: TallyClient) {
///     // dispatch() and snapshot() are provided automatically.
///     let _ = client.dispatch(Hit).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait DomainClient<S: SessionState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `SessionClient`.
    fn inner(&self) -> &SessionClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send an event and return its outcome.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: S::Event) -> Result<S::Outcome, Self::Error> {
        tracing::debug!("Sending event");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of the session state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Requesting snapshot");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
