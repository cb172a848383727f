use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique record ids for the domain store.
///
/// Injected so tests can run with a deterministic generator while
/// production uses random UUIDs. Ids must be pairwise distinct for the
/// lifetime of the store.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Production id source: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic id source for tests: a monotonic counter embedded in
/// the UUID's low bits.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(n))
    }
}
