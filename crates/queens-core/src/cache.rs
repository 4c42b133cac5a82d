//! Boundary to a store of previously computed placements.
//!
//! The solvers never consult a cache themselves. Callers look up a board size
//! first, fall back to a solver on a miss, and hand the result back with
//! [`PlacementCache::store`]. [`NoopCache`] and [`MemoryCache`] stand in for a
//! persistent store in tests and `--no-cache` runs.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::board::{Placement, SolutionSet};
use crate::error::QueensError;

/// A store of placements keyed by board size.
pub trait PlacementCache {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The earliest stored placement for `n`, i.e. the one with the smallest id.
    fn lookup(&self, n: usize) -> Result<Option<Placement>, Self::Error>;

    /// Every distinct placement stored for `n`, in id order.
    fn lookup_all(&self, n: usize) -> Result<SolutionSet, Self::Error>;

    /// Persist `placement` for board size `n` under a caller-chosen `id`.
    fn store(&mut self, n: usize, placement: &Placement, id: u64) -> Result<(), Self::Error>;

    /// One past the largest id in use, `1` for an empty store.
    fn next_id(&self) -> Result<u64, Self::Error>;
}

/// A cache that never remembers anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl PlacementCache for NoopCache {
    type Error = Infallible;

    fn lookup(&self, _n: usize) -> Result<Option<Placement>, Self::Error> {
        Ok(None)
    }

    fn lookup_all(&self, n: usize) -> Result<SolutionSet, Self::Error> {
        Ok(SolutionSet::new(n))
    }

    fn store(&mut self, _n: usize, _placement: &Placement, _id: u64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn next_id(&self) -> Result<u64, Self::Error> {
        Ok(1)
    }
}

/// In-memory cache ordered by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: BTreeMap<u64, Placement>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored placements across all board sizes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn for_size(&self, n: usize) -> impl Iterator<Item = &Placement> + '_ {
        self.entries.values().filter(move |p| p.size() == n)
    }
}

impl PlacementCache for MemoryCache {
    type Error = QueensError;

    fn lookup(&self, n: usize) -> Result<Option<Placement>, Self::Error> {
        Ok(self.for_size(n).next().cloned())
    }

    fn lookup_all(&self, n: usize) -> Result<SolutionSet, Self::Error> {
        let mut set = SolutionSet::new(n);
        for placement in self.for_size(n) {
            set.insert(placement.clone())?;
        }
        Ok(set)
    }

    fn store(&mut self, n: usize, placement: &Placement, id: u64) -> Result<(), Self::Error> {
        if placement.size() != n {
            return Err(QueensError::invalid_placement(format!(
                "placement of size {} stored as n = {}",
                placement.size(),
                n
            )));
        }
        self.entries.insert(id, placement.clone());
        Ok(())
    }

    fn next_id(&self) -> Result<u64, Self::Error> {
        Ok(self.entries.keys().next_back().map_or(1, |id| id + 1))
    }
}
