//! # Framework Errors
//!
//! Errors raised by the session runtime itself, as opposed to the errors a
//! [`SessionState`](crate::SessionState) returns from its own event handler.

/// Errors that can occur within the session framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Session actor closed")]
    ActorClosed,
    #[error("Session actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}
