//! Error types for the catalog session.
//!
//! Field validation failures are not errors here: they come back as a rejected
//! [`SubmitOutcome`](crate::session::SubmitOutcome) carrying an
//! [`ErrorMap`](crate::model::ErrorMap). `CatalogError` covers everything else.

use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A form operation arrived while the form surface was closed.
    #[error("Product form is closed")]
    FormClosed,

    /// No seed category carries the requested name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The id generator produced an id that is already in the collection.
    #[error("Generated product id already in use: {0}")]
    DuplicateId(ProductId),

    /// The seed data could not be read or is inconsistent.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Settings that cannot start a session, such as a zero mailbox capacity.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// The session answered with an outcome that does not belong to the request.
    #[error("Unexpected outcome: {0}")]
    UnexpectedOutcome(String),

    /// An error occurred while communicating with the session actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
