//! Product id generation.
//!
//! The session asks for one id per successful submit. [`UuidIds`] is the production
//! generator; [`SequentialIds`] yields `product_1`, `product_2`, ... and is handy where
//! stable ids matter (tests, the demo binary).

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::model::ProductId;

/// Source of fresh product ids. Shared with the session actor as its run context.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ProductId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> ProductId {
        ProductId(Uuid::new_v4().to_string())
    }
}

/// Monotonic `"{prefix}_{n}"` ids.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    /// Starts at `product_1`.
    pub fn new() -> Self {
        Self::starting_at("product", 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ProductId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        ProductId(format!("{}_{}", self.prefix, n))
    }
}
