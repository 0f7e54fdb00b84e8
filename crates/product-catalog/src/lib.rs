//! # Product Catalog
//!
//! The state core of a product catalog screen: a grid of product cards and an
//! "add product" form whose draft is validated before it joins the collection.
//!
//! ## Core Components
//!
//! - **[session]**: [`CatalogSession`](session::CatalogSession), the pure state machine
//!   (form visibility, draft, errors, color and category selection, the collection).
//! - **[validation]**: the draft rules and their messages.
//! - **[catalog_actor]**: runs a session inside a [`session_framework::SessionActor`].
//! - **[clients]**: [`CatalogClient`](clients::CatalogClient), one async method per user
//!   interaction.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops it all.
//!
//! ## Testing
//!
//! The session is plain data and can be driven directly. For client code, see
//! [`session_framework::mock`].

pub mod card;
pub mod catalog_actor;
pub mod clients;
pub mod colors;
pub mod config;
pub mod error;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod seed;
pub mod session;
pub mod validation;
