//! Identifier generation for newly inserted documents.
//!
//! Identifiers are derived from the wall clock in milliseconds since the Unix epoch.
//! The [`IdStrategy`] decides what happens when two inserts land in the same
//! millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::document::DocumentId;

/// How a store derives identifiers for inserted documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// The identifier is the current time in milliseconds.
    ///
    /// Two inserts within the same millisecond receive the same identifier and the
    /// later one overwrites the earlier.
    WallClock,
    /// The identifier is the current time in milliseconds, bumped past the last
    /// identifier handed out (or observed) when the clock has not moved on.
    ///
    /// Identifiers are strictly increasing within a store until `i64::MAX` has been
    /// handed out or observed. Past that point the generator falls back to the clock
    /// and the store picks the lowest free identifier at or above it.
    #[default]
    Monotonic,
}

/// Hands out document identifiers according to an [`IdStrategy`].
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last: AtomicI64::new(i64::MIN),
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Returns the identifier for a document inserted now.
    pub fn next_id(&self) -> DocumentId {
        self.next_id_at(now_millis())
    }

    /// Records an identifier that entered the store by other means (e.g. import),
    /// so that monotonic identifiers stay ahead of it.
    pub fn observe(&self, id: DocumentId) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }

    fn next_id_at(&self, now: DocumentId) -> DocumentId {
        match self.strategy {
            IdStrategy::WallClock => {
                self.last.fetch_max(now, Ordering::SeqCst);
                now
            }
            IdStrategy::Monotonic => {
                let advance = |last: DocumentId| last.checked_add(1).map(|next| now.max(next));

                match self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, advance) {
                    Ok(previous) => advance(previous).unwrap_or(now),
                    // nothing left above `last`
                    Err(_) => now,
                }
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

/// Current Unix time in milliseconds.
pub fn now_millis() -> DocumentId {
    Utc::now().timestamp_millis()
}
