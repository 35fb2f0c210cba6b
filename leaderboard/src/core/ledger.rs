//! Append-only history of accepted solutions
//!
//! Entries only ever get appended, and only when they strictly beat the
//! current last entry. That keeps the last entry the best one without any
//! separate max tracking; `append` enforces it.

use std::sync::{Arc, OnceLock};

use super::problem::Ranked;
use crate::error::{LeaderboardError, LeaderboardResult};

const INITIAL_CAPACITY: usize = 16;

/// Entries live in a shared slab of write-once slots. A ledger sees only the
/// first `len` slots, so cloning it is a pointer copy and a clone never
/// observes entries appended after it was taken.
#[derive(Debug)]
pub struct Ledger<R> {
    slots: Arc<[OnceLock<Arc<R>>]>,
    len: usize,
}

// Manual impl: cloning shares the slab and must not require `R: Clone`
impl<R> Clone for Ledger<R> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            len: self.len,
        }
    }
}

impl<R> Default for Ledger<R> {
    fn default() -> Self {
        Self {
            slots: Arc::from(Vec::new()),
            len: 0,
        }
    }
}

impl<R: Ranked> Ledger<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strictly improving entry and return its index
    pub fn append(&mut self, entry: R) -> LeaderboardResult<usize> {
        let objective = entry.objective();
        let best = self.best_objective();
        if !self.is_empty() && objective <= best {
            return Err(LeaderboardError::LedgerOrder { objective, best });
        }

        let mut entry = Arc::new(entry);
        if let Some(slot) = self.slots.get(self.len) {
            match slot.set(entry) {
                Ok(()) => {
                    self.len += 1;
                    return Ok(self.len - 1);
                }
                // Another clone already claimed this slot; move to a slab of our own
                Err(taken) => entry = taken,
            }
        }

        self.regrow_with(entry);
        self.len += 1;
        Ok(self.len - 1)
    }

    /// Copy the visible entries plus `next` into a private, larger slab
    fn regrow_with(&mut self, next: Arc<R>) {
        let capacity = (self.len * 2).max(INITIAL_CAPACITY);
        let mut next = Some(next);
        let slots: Vec<OnceLock<Arc<R>>> = (0..capacity)
            .map(|i| match self.at(i) {
                Some(entry) => OnceLock::from(Arc::clone(entry)),
                None if i == self.len => next.take().map_or_else(OnceLock::new, OnceLock::from),
                None => OnceLock::new(),
            })
            .collect();
        self.slots = Arc::from(slots);
    }

    /// Last entry, which is the best by construction
    pub fn best(&self) -> Option<&Arc<R>> {
        self.len.checked_sub(1).and_then(|last| self.at(last))
    }

    /// Objective of the best entry, 0 when empty
    pub fn best_objective(&self) -> u64 {
        self.best().map_or(0, |entry| entry.objective())
    }

    pub fn at(&self, index: usize) -> Option<&Arc<R>> {
        if index >= self.len {
            return None;
        }
        self.slots.get(index).and_then(OnceLock::get)
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<R>> {
        self.slots[..self.len].iter().filter_map(OnceLock::get)
    }
}
