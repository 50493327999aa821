//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload and the moment it was stored.
///
/// Entries are never mutated in place; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was stored
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry is eligible for reclamation at `now`.
    ///
    /// Boundary condition: an entry is stale only when `created_at + interval`
    /// is strictly before `now`. An entry whose window ends exactly at `now`
    /// survives the current sweep.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        match self.created_at.checked_add(interval) {
            Some(deadline) => deadline < now,
            None => false,
        }
    }

    // == Age ==
    /// Returns how long ago the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
