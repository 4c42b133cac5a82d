//! Exhaustive enumeration of N-Queens placements.
//!
//! The board is modelled as one variable per column whose domain is the set
//! of rows. Any two columns `c1 < c2` are constrained by `row(c1) != row(c2)`
//! and `|row(c1) - row(c2)| != c2 - c1`.
//!
//! # Algorithm
//!
//! Depth-first backtracking over columns in increasing order:
//!
//! 1. **Candidate selection**: take the lowest free row of the current column,
//!    checked in O(1) against the sets of occupied rows and of occupied
//!    diagonals in both directions
//! 2. **Descent**: place the queen and move to the next column
//! 3. **Backtracking**: when a column has no free row left, lift the previous
//!    queen and resume from its next row
//! 4. **Recording**: one past the last column the assignment is a solution;
//!    it is emitted and the search backtracks to look for the next one
//!
//! Solutions therefore come out in lexicographic order of their
//! row-per-column sequence, and the order is identical across runs.
//!
//! # Example
//!
//! ```
//! use queens_core::search::{all_solutions, Search};
//!
//! assert_eq!(all_solutions(6).len(), 4);
//!
//! // Stop at the first solution without enumerating the rest
//! let first = Search::new(8).next().unwrap();
//! assert_eq!(first.rows(), vec![1, 5, 8, 6, 3, 7, 2, 4]);
//! ```

mod conflicts;
#[cfg(feature = "parallel")]
mod parallel;

#[cfg(test)]
mod tests;

use log::debug;

use crate::board::{Coordinate, Placement, SolutionSet};
use conflicts::ConflictSets;

#[cfg(feature = "parallel")]
pub use parallel::{all_solutions_parallel, count_solutions_parallel};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Queens placed, i.e. nodes of the search tree entered
    pub nodes: u64,
    /// Queens lifted again
    pub backtracks: u64,
    /// Complete placements found
    pub solutions: u64,
}

impl SearchStats {
    #[cfg(feature = "parallel")]
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.backtracks += other.backtracks;
        self.solutions += other.solutions;
    }
}

/// Lazy backtracking search yielding every placement for one board size.
///
/// Each call to [`Iterator::next`] resumes the search where the previous
/// solution left it.
#[derive(Debug, Clone)]
pub struct Search {
    n: usize,
    conflicts: ConflictSets,
    /// 0-based row of each placed column
    assignment: Vec<usize>,
    /// First row still to try in the current column
    cursor: usize,
    /// Number of leading columns fixed by the caller; never backtracked over
    fixed: usize,
    done: bool,
    stats: SearchStats,
}

impl Search {
    /// Search the whole tree for a board of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            conflicts: ConflictSets::new(n),
            assignment: Vec::with_capacity(n),
            cursor: 0,
            fixed: 0,
            done: false,
            stats: SearchStats::default(),
        }
    }

    /// Search only the subtree where column 1 holds a queen in `first_row`
    /// (1-based).
    ///
    /// The subtrees for `first_row` in `1..=n` partition the solution set.
    pub fn rooted(n: usize, first_row: usize) -> Self {
        let mut search = Self::new(n);
        if first_row == 0 || first_row > n {
            search.done = true;
            return search;
        }

        search.conflicts.place(first_row - 1, 0);
        search.assignment.push(first_row - 1);
        search.fixed = 1;
        search.stats.nodes = 1;
        search
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Move to the next complete assignment.
    ///
    /// Returns false once the tree is exhausted.
    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }

        // Leave the previously reported solution before looking further.
        if self.assignment.len() == self.n && self.stats.solutions > 0 && !self.backtrack() {
            self.done = true;
            return false;
        }

        loop {
            let col = self.assignment.len();
            if col == self.n {
                self.stats.solutions += 1;
                return true;
            }

            match self.conflicts.next_free_row(col, self.cursor) {
                Some(row) => {
                    self.conflicts.place(row, col);
                    self.assignment.push(row);
                    self.cursor = 0;
                    self.stats.nodes += 1;
                }
                None => {
                    if !self.backtrack() {
                        self.done = true;
                        return false;
                    }
                }
            }
        }
    }

    /// Lift the most recent queen and point the cursor past its row.
    fn backtrack(&mut self) -> bool {
        if self.assignment.len() <= self.fixed {
            return false;
        }

        match self.assignment.pop() {
            Some(row) => {
                let col = self.assignment.len();
                self.conflicts.remove(row, col);
                self.cursor = row + 1;
                self.stats.backtracks += 1;
                true
            }
            None => false,
        }
    }

    fn current_placement(&self) -> Placement {
        let queens = self
            .assignment
            .iter()
            .enumerate()
            .map(|(col, &row)| Coordinate::new(row + 1, col + 1))
            .collect();
        Placement::from_solver(queens)
    }

    /// Exhaust the search, counting solutions without building placements.
    pub fn into_count(mut self) -> usize {
        let mut count = 0;
        while self.advance() {
            count += 1;
        }
        count
    }
}

impl Iterator for Search {
    type Item = Placement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.current_placement())
        } else {
            None
        }
    }
}

/// Enumerate every placement for a board of size `n`.
///
/// Never fails: boards without a placement (`n = 2`, `n = 3`) give an empty
/// set, and `n = 0` gives the single empty placement.
pub fn all_solutions(n: usize) -> SolutionSet {
    all_solutions_with_stats(n).0
}

/// Like [`all_solutions`], also returning the search counters.
pub fn all_solutions_with_stats(n: usize) -> (SolutionSet, SearchStats) {
    let mut search = Search::new(n);
    let mut solutions = SolutionSet::new(n);
    for placement in search.by_ref() {
        solutions.push(placement);
    }

    let stats = search.stats();
    debug!(
        "Enumerated {} placements for n = {} ({} nodes, {} backtracks)",
        solutions.len(),
        n,
        stats.nodes,
        stats.backtracks
    );
    (solutions, stats)
}

/// Number of placements for a board of size `n`.
pub fn count_solutions(n: usize) -> usize {
    Search::new(n).into_count()
}
