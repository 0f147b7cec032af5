//! Injected id generation for new records.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// The kinds of ids the store mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Product,
    Order,
}

impl IdKind {
    const fn prefix(self) -> &'static str {
        match self {
            Self::User => "u",
            Self::Product => "p",
            Self::Order => "o",
        }
    }
}

/// Source of fresh record ids.
///
/// Every id returned must be unique within its kind for the lifetime of
/// the store. Seed ids (`p1`, `u1`, `m1`) are fixed data, not generator
/// output, and generated ids carry a `u_`/`p_`/`o_` prefix to stay out of
/// their way.
pub trait IdGenerator: Send + Sync {
    /// Mint an id for a new record of the given kind.
    fn next(&self, kind: IdKind) -> String;
}

/// Uuid-v4 ids.
///
/// Collision-free across restarts, which makes it the production default:
/// the sequence counter would reset on reboot, a clock-based id can repeat
/// within a millisecond.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next(&self, kind: IdKind) -> String {
        format!("{}_{}", kind.prefix(), Uuid::new_v4().simple())
    }
}

/// Monotonic per-kind counters, for deterministic tests.
#[derive(Debug)]
pub struct SequenceIds {
    users: AtomicU64,
    products: AtomicU64,
    orders: AtomicU64,
}

impl SequenceIds {
    /// Counters starting at 1, so the first ids are `u_1`, `p_1`, `o_1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: AtomicU64::new(1),
            products: AtomicU64::new(1),
            orders: AtomicU64::new(1),
        }
    }

    const fn counter(&self, kind: IdKind) -> &AtomicU64 {
        match kind {
            IdKind::User => &self.users,
            IdKind::Product => &self.products,
            IdKind::Order => &self.orders,
        }
    }
}

impl Default for SequenceIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIds {
    fn next(&self, kind: IdKind) -> String {
        let n = self.counter(kind).fetch_add(1, Ordering::Relaxed);
        format!("{}_{n}", kind.prefix())
    }
}
