//! Parallel enumeration, one independent search per row of the first column.

use log::debug;
use rayon::prelude::*;

use super::{Search, SearchStats};
use crate::board::{Placement, SolutionSet};

/// Enumerate every placement for a board of size `n` on the rayon pool.
///
/// Each worker owns its conflict sets and searches a disjoint subtree, so the
/// merged set has neither duplicates nor omissions. The order of the result is
/// unspecified.
pub fn all_solutions_parallel(n: usize) -> SolutionSet {
    if n < 2 {
        return super::all_solutions(n);
    }

    let subtrees: Vec<(Vec<Placement>, SearchStats)> = (1..=n)
        .into_par_iter()
        .map(|first_row| {
            let mut search = Search::rooted(n, first_row);
            let placements: Vec<Placement> = search.by_ref().collect();
            (placements, search.stats())
        })
        .collect();

    let mut stats = SearchStats::default();
    let mut placements = Vec::new();
    for (chunk, chunk_stats) in subtrees {
        stats.merge(&chunk_stats);
        placements.extend(chunk);
    }

    debug!(
        "Enumerated {} placements for n = {} across {} subtrees ({} nodes, {} backtracks)",
        placements.len(),
        n,
        n,
        stats.nodes,
        stats.backtracks
    );
    SolutionSet::from_placements(n, placements)
}

/// Number of placements for a board of size `n`, counted on the rayon pool.
pub fn count_solutions_parallel(n: usize) -> usize {
    if n < 2 {
        return super::count_solutions(n);
    }

    (1..=n)
        .into_par_iter()
        .map(|first_row| Search::rooted(n, first_row).into_count())
        .sum()
}
