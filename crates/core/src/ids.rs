use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Injected id source. Ids are fresh per creation and unique within a
/// run; the `prefix` names the entity kind (`task`, `draft`, `audit`, ...).
pub trait IdGenerator: Send + Sync {
    fn next(&self, prefix: &str) -> String;
}

/// Production generator: `prefix_<uuid-v4>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next(&self, prefix: &str) -> String {
        format!("{prefix}_{}", Uuid::new_v4())
    }
}

/// Monotonic generator for tests: `prefix_0001`, `prefix_0002`, ...
/// The counter is shared across prefixes so every id is globally unique.
/// Ids stay unique under concurrent callers, but the numbering order then
/// follows task scheduling; pin runs to a single-threaded runtime when a
/// test asserts exact ids.
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}_{n:04}")
    }
}
