//! # Session Framework
//!
//! Building blocks for interactive sessions whose state is owned by a single tokio task.
//!
//! A UI session is a small state machine fed by user events: open a form, edit a field,
//! submit. Those events must be applied one at a time, each running to completion before
//! the next. This crate packages that as an actor: the state lives inside a
//! [`SessionActor`], and the rest of the program talks to it through a cloneable
//! [`SessionClient`].
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`SessionState`]) - your transitions, written as plain methods
//! 2. **Runtime Layer** ([`SessionActor`]) - the mailbox loop that applies events in order
//! 3. **Interface Layer** ([`SessionClient`], [`DomainClient`]) - typed request/response
//!
//! ## Concurrency Model
//!
//! - One actor per session, running in its own tokio task
//! - Events are processed **sequentially**; the state is never shared, so no locks
//! - Dropping the last client ends the loop and returns the final state
//!
//! ## Testing
//!
//! [`mock::MockSession`] answers client requests from a queue of expectations, so domain
//! clients can be tested without a real state behind them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod telemetry;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use client_trait::DomainClient;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
pub use state::SessionState;
pub use telemetry::setup_tracing;
