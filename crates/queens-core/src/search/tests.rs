//! Exhaustive search tests.
//!
//! Counts are checked against the known number of placements per board size
//! (OEIS A000170).

use std::collections::HashSet;

use super::*;
use crate::board::check_placement;
use crate::reference::known_solution_count;

/// Row-per-column sequences of every placement in a set
fn rows_of(solutions: &SolutionSet) -> Vec<Vec<usize>> {
    solutions.iter().map(|p| p.rows()).collect()
}

// ============================================================================
// Boundary boards
// ============================================================================

#[test]
fn test_all_solutions_empty_board() {
    let solutions = all_solutions(0);
    assert_eq!(solutions.len(), 1);
    assert!(solutions.first().unwrap().is_empty());
}

#[test]
fn test_all_solutions_single_queen() {
    let solutions = all_solutions(1);
    assert_eq!(solutions.len(), 1);
    assert_eq!(
        solutions.first().unwrap().coordinates(),
        &[Coordinate::new(1, 1)]
    );
}

#[test]
fn test_all_solutions_unsolvable_boards() {
    assert!(all_solutions(2).is_empty());
    assert!(all_solutions(3).is_empty());
    assert_eq!(all_solutions(3).size(), 3);
}

// ============================================================================
// Counts and validity
// ============================================================================

#[test]
fn test_all_solutions_counts() {
    let expected = [(4, 2), (5, 10), (6, 4), (7, 40), (8, 92), (9, 352), (10, 724), (11, 2680)];
    for (n, count) in expected {
        assert_eq!(all_solutions(n).len(), count, "wrong count for n = {}", n);
    }
}

#[test]
fn test_counts_match_reference_table() {
    for n in 0..=10 {
        let expected = known_solution_count(n).unwrap() as usize;
        assert_eq!(count_solutions(n), expected, "wrong count for n = {}", n);
    }
}

#[test]
fn test_all_solutions_are_valid() {
    for n in 4..=9 {
        for placement in &all_solutions(n) {
            assert_eq!(placement.len(), n);
            if let Err(e) = check_placement(placement.coordinates()) {
                panic!("invalid placement {} for n = {}: {}", placement, n, e);
            }
        }
    }
}

#[test]
fn test_all_solutions_no_duplicates() {
    for n in 4..=9 {
        let solutions = all_solutions(n);
        let distinct: HashSet<_> = solutions.iter().collect();
        assert_eq!(distinct.len(), solutions.len(), "duplicates for n = {}", n);
    }
}

#[test]
fn test_all_solutions_n4() {
    let solutions = all_solutions(4);
    assert_eq!(rows_of(&solutions), vec![vec![2, 4, 1, 3], vec![3, 1, 4, 2]]);
}

// ============================================================================
// Ordering and determinism
// ============================================================================

#[test]
fn test_all_solutions_lexicographic_order() {
    let rows = rows_of(&all_solutions(8));
    let mut sorted = rows.clone();
    sorted.sort();
    assert_eq!(rows, sorted);
    assert_eq!(rows[0], vec![1, 5, 8, 6, 3, 7, 2, 4]);
    assert_eq!(rows[91], vec![8, 4, 1, 3, 6, 2, 7, 5]);
}

#[test]
fn test_all_solutions_deterministic() {
    assert_eq!(all_solutions(8), all_solutions(8));
    assert_eq!(all_solutions(9), all_solutions(9));
}

#[test]
fn test_count_matches_enumeration() {
    for n in 0..=9 {
        assert_eq!(count_solutions(n), all_solutions(n).len());
    }
}

// ============================================================================
// Lazy search
// ============================================================================

#[test]
fn test_search_is_lazy() {
    let mut search = Search::new(10);
    let first = search.next().unwrap();
    assert_eq!(first.rows(), vec![1, 3, 6, 8, 10, 5, 9, 2, 4, 7]);
    assert_eq!(search.stats().solutions, 1);

    // Resuming continues after the first solution.
    assert_eq!(search.count(), 723);
}

#[test]
fn test_search_exhausted_stays_exhausted() {
    let mut search = Search::new(4);
    assert!(search.next().is_some());
    assert!(search.next().is_some());
    assert!(search.next().is_none());
    assert!(search.next().is_none());
}

#[test]
fn test_search_stats() {
    let (solutions, stats) = all_solutions_with_stats(6);
    assert_eq!(stats.solutions, solutions.len() as u64);
    assert!(stats.nodes >= stats.backtracks);
    // A full sweep lifts every queen it placed.
    assert_eq!(stats.nodes, stats.backtracks);
}

#[test]
fn test_rooted_search_partitions_solutions() {
    let n = 8;
    let mut merged = Vec::new();
    for first_row in 1..=n {
        let subtree: Vec<Placement> = Search::rooted(n, first_row).collect();
        assert!(subtree.iter().all(|p| p.row_of(1) == Some(first_row)));
        merged.extend(subtree);
    }
    assert_eq!(merged, all_solutions(n).into_vec());
}

#[test]
fn test_rooted_search_out_of_range() {
    assert_eq!(Search::rooted(5, 0).count(), 0);
    assert_eq!(Search::rooted(5, 6).count(), 0);
}

// ============================================================================
// Parallel enumeration
// ============================================================================

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    for n in 0..=9 {
        let sequential: HashSet<_> = all_solutions(n).into_iter().collect();
        let parallel = all_solutions_parallel(n);
        assert_eq!(parallel.len(), sequential.len(), "count mismatch for n = {}", n);
        assert!(parallel.iter().all(|p| sequential.contains(p)));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_count() {
    assert_eq!(count_solutions_parallel(10), 724);
    assert_eq!(count_solutions_parallel(3), 0);
    assert_eq!(count_solutions_parallel(1), 1);
}
