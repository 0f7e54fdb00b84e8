//! Pure data structures shared by the session, the actor and its clients.

pub mod draft;
pub mod error_map;
pub mod product;

pub use draft::*;
pub use error_map::*;
pub use product::*;
