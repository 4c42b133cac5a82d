//! Dispatch from a requested mode to the matching solver.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::board::{Placement, SolutionSet};
use crate::closed_form::first_solution;
use crate::error::QueensError;
use crate::search::all_solutions;

/// What the caller wants computed for a board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One placement, by closed-form construction
    First,
    /// Every placement, by exhaustive search
    All,
}

impl FromStr for Mode {
    type Err = QueensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "first" => Ok(Mode::First),
            "a" | "all" => Ok(Mode::All),
            _ => Err(QueensError::UnknownMode {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::First => write!(f, "F"),
            Mode::All => write!(f, "A"),
        }
    }
}

/// Result of a solver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    One(Placement),
    All(SolutionSet),
}

impl Solution {
    /// The single placement, or the first one of the set.
    pub fn first(&self) -> Option<&Placement> {
        match self {
            Solution::One(placement) => Some(placement),
            Solution::All(set) => set.first(),
        }
    }

    /// Number of placements carried.
    pub fn len(&self) -> usize {
        match self {
            Solution::One(_) => 1,
            Solution::All(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn placements(&self) -> &[Placement] {
        match self {
            Solution::One(placement) => std::slice::from_ref(placement),
            Solution::All(set) => set.as_slice(),
        }
    }
}

/// Solver front end.
///
/// Picks the closed-form construction or the exhaustive search depending on
/// the [`Mode`].
#[derive(Debug, Clone, Default)]
pub struct Solver {
    /// Enumerate on the rayon pool in [`Mode::All`]
    pub parallel: bool,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether exhaustive search may run in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn solve(&self, n: usize, mode: Mode) -> Result<Solution, QueensError> {
        debug!("Solving n = {} in mode {}", n, mode);
        match mode {
            Mode::First => first_solution(n).map(Solution::One),
            Mode::All => Ok(Solution::All(self.enumerate(n))),
        }
    }

    #[cfg(feature = "parallel")]
    fn enumerate(&self, n: usize) -> SolutionSet {
        if self.parallel {
            crate::search::all_solutions_parallel(n)
        } else {
            all_solutions(n)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn enumerate(&self, n: usize) -> SolutionSet {
        if self.parallel {
            log::warn!("Built without the `parallel` feature, searching sequentially");
        }
        all_solutions(n)
    }
}

/// Solve `n` in `mode` with the default [`Solver`].
pub fn solve(n: usize, mode: Mode) -> Result<Solution, QueensError> {
    Solver::new().solve(n, mode)
}
