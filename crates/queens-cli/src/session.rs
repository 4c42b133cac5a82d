//! Cache-first solving.
//!
//! A [`Session`] owns the placement cache for the lifetime of one CLI run. It
//! consults the cache before invoking a solver and stores whatever it
//! computes under consecutive ids.

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::{debug, info};

use queens_core::{known_solution_count, Mode, Placement, PlacementCache, Solution, Solver};

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Loaded from the placement store
    Store,
    /// Computed by a solver
    Computed,
}

/// Result of one [`Session::solve`] call
#[derive(Debug, Clone)]
pub struct Outcome {
    pub n: usize,
    pub mode: Mode,
    pub solution: Solution,
    pub source: Source,
    /// Ids assigned to placements stored by this call
    pub stored_ids: Vec<u64>,
}

pub struct Session<C: PlacementCache> {
    cache: C,
    solver: Solver,
    next_id: u64,
}

impl<C: PlacementCache> Session<C> {
    /// Start a session, continuing the id sequence already in `cache`.
    pub fn new(cache: C, solver: Solver) -> Result<Self> {
        let next_id = cache.next_id().context("Failed to read the next placement id")?;
        debug!("Session starts at placement id {}", next_id);
        Ok(Self {
            cache,
            solver,
            next_id,
        })
    }

    #[cfg(test)]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    #[cfg(test)]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn solve(&mut self, n: usize, mode: Mode) -> Result<Outcome> {
        match mode {
            Mode::First => self.first(n),
            Mode::All => self.all(n),
        }
    }

    fn first(&mut self, n: usize) -> Result<Outcome> {
        if let Some(placement) = self.cache.lookup(n).context("Failed to query the placement store")? {
            return Ok(Outcome {
                n,
                mode: Mode::First,
                solution: Solution::One(placement),
                source: Source::Store,
                stored_ids: Vec::new(),
            });
        }

        let solution = self.solver.solve(n, Mode::First)?;
        let mut stored_ids = Vec::new();
        // The empty board has nothing to persist.
        if let Some(placement) = solution.first().filter(|p| !p.is_empty()) {
            stored_ids.push(self.save(n, placement)?);
        }

        Ok(Outcome {
            n,
            mode: Mode::First,
            solution,
            source: Source::Computed,
            stored_ids,
        })
    }

    /// A stored set only counts as a hit when it is known to be complete.
    fn all(&mut self, n: usize) -> Result<Outcome> {
        let stored = self
            .cache
            .lookup_all(n)
            .context("Failed to query the placement store")?;

        let complete = !stored.is_empty() && known_solution_count(n) == Some(stored.len() as u64);
        if complete {
            return Ok(Outcome {
                n,
                mode: Mode::All,
                solution: Solution::All(stored),
                source: Source::Store,
                stored_ids: Vec::new(),
            });
        }
        if !stored.is_empty() {
            info!(
                "Store holds {} placements for n = {}, enumerating the rest",
                stored.len(),
                n
            );
        }

        let known: HashSet<Placement> = stored.into_iter().collect();
        let solution = self.solver.solve(n, Mode::All)?;
        let mut stored_ids = Vec::new();
        for placement in solution.placements() {
            if !placement.is_empty() && !known.contains(placement) {
                stored_ids.push(self.save(n, placement)?);
            }
        }

        Ok(Outcome {
            n,
            mode: Mode::All,
            solution,
            source: Source::Computed,
            stored_ids,
        })
    }

    fn save(&mut self, n: usize, placement: &Placement) -> Result<u64> {
        let id = self.next_id;
        self.cache
            .store(n, placement, id)
            .with_context(|| format!("Failed to store placement {}", id))?;
        self.next_id += 1;
        Ok(id)
    }
}
