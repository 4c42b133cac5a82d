//! Board coordinates, placements and solution sets.
//!
//! All public coordinates are 1-based: on a board of size `n`, both `row`
//! and `col` range over `1..=n`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QueensError;

/// Parse a board size from user input.
///
/// Accepts any non-negative integer, surrounding whitespace is ignored.
pub fn parse_board_size(input: &str) -> Result<usize, QueensError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| QueensError::InvalidSize {
            input: input.trim().to_string(),
        })
}

/// A single queen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether a queen here attacks a queen at `other` along a row, column or diagonal.
    pub fn attacks(&self, other: &Coordinate) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Check that `queens` is a complete non-attacking placement on a board of
/// size `queens.len()`.
///
/// Rows and columns must each be a permutation of `1..=n` and no two queens
/// may share a diagonal.
pub fn check_placement(queens: &[Coordinate]) -> Result<(), QueensError> {
    let n = queens.len();
    let mut rows = vec![false; n + 1];
    let mut cols = vec![false; n + 1];

    for queen in queens {
        if queen.row == 0 || queen.row > n || queen.col == 0 || queen.col > n {
            return Err(QueensError::invalid_placement(format!(
                "queen {} is off a {}x{} board",
                queen, n, n
            )));
        }
        if std::mem::replace(&mut rows[queen.row], true) {
            return Err(QueensError::invalid_placement(format!(
                "row {} holds more than one queen",
                queen.row
            )));
        }
        if std::mem::replace(&mut cols[queen.col], true) {
            return Err(QueensError::invalid_placement(format!(
                "column {} holds more than one queen",
                queen.col
            )));
        }
    }

    for (i, a) in queens.iter().enumerate() {
        for b in &queens[i + 1..] {
            if a.row.abs_diff(b.row) == a.col.abs_diff(b.col) {
                return Err(QueensError::invalid_placement(format!(
                    "queens {} and {} share a diagonal",
                    a, b
                )));
            }
        }
    }

    Ok(())
}

/// Convenience wrapper around [`check_placement`].
pub fn is_valid_placement(queens: &[Coordinate]) -> bool {
    check_placement(queens).is_ok()
}

/// A complete placement of `n` non-attacking queens, one per column.
///
/// Queens are kept in increasing column order. A `Placement` can only be
/// obtained from a solver or through [`Placement::from_coordinates`], so every
/// value satisfies the non-attacking invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Placement {
    queens: Vec<Coordinate>,
}

impl Placement {
    /// Build a placement from queens in any order.
    ///
    /// Fails unless the queens form a complete non-attacking placement.
    pub fn from_coordinates<I>(queens: I) -> Result<Self, QueensError>
    where
        I: IntoIterator,
        I::Item: Into<Coordinate>,
    {
        let mut queens: Vec<Coordinate> = queens.into_iter().map(Into::into).collect();
        check_placement(&queens)?;
        queens.sort_by_key(|q| q.col);
        Ok(Self { queens })
    }

    /// Build a placement from the row of each column, 1-based, column 1 first.
    pub fn from_rows(rows: &[usize]) -> Result<Self, QueensError> {
        Self::from_coordinates(
            rows.iter()
                .enumerate()
                .map(|(col, &row)| Coordinate::new(row, col + 1)),
        )
    }

    /// Wrap solver output that is already known to be valid.
    pub(crate) fn from_solver(mut queens: Vec<Coordinate>) -> Self {
        queens.sort_by_key(|q| q.col);
        debug_assert!(is_valid_placement(&queens), "solver produced {:?}", queens);
        Self { queens }
    }

    /// The empty placement on a 0x0 board.
    pub fn empty() -> Self {
        Self { queens: Vec::new() }
    }

    /// Board size, equal to the number of queens.
    pub fn size(&self) -> usize {
        self.queens.len()
    }

    pub fn len(&self) -> usize {
        self.queens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }

    /// Queens in increasing column order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.queens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.queens.iter()
    }

    /// The row of each column, column 1 first.
    pub fn rows(&self) -> Vec<usize> {
        self.queens.iter().map(|q| q.row).collect()
    }

    /// Row of the queen standing in `col`, if `col` is on the board.
    pub fn row_of(&self, col: usize) -> Option<usize> {
        col.checked_sub(1)
            .and_then(|idx| self.queens.get(idx))
            .map(|q| q.row)
    }
}

impl TryFrom<Vec<Coordinate>> for Placement {
    type Error = QueensError;

    fn try_from(queens: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::from_coordinates(queens)
    }
}

impl From<Placement> for Vec<Coordinate> {
    fn from(placement: Placement) -> Self {
        placement.queens
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.queens.iter()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, queen) in self.queens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", queen)?;
        }
        write!(f, "]")
    }
}

/// Every placement found for one board size, in discovery order.
///
/// Membership is tracked in a hash index, so [`SolutionSet::insert`] and
/// [`SolutionSet::contains`] take constant time.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    size: usize,
    placements: Vec<Placement>,
    index: HashSet<Placement>,
}

impl SolutionSet {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            placements: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Wrap placements that are already known to be distinct.
    #[cfg(feature = "parallel")]
    pub(crate) fn from_placements(size: usize, placements: Vec<Placement>) -> Self {
        let index = placements.iter().cloned().collect();
        Self {
            size,
            placements,
            index,
        }
    }

    pub(crate) fn push(&mut self, placement: Placement) {
        debug_assert_eq!(placement.size(), self.size);
        let fresh = self.index.insert(placement.clone());
        debug_assert!(fresh, "duplicate placement {}", placement);
        self.placements.push(placement);
    }

    /// Add a placement built outside the solvers.
    ///
    /// Returns `Ok(false)` if an identical placement is already present.
    pub fn insert(&mut self, placement: Placement) -> Result<bool, QueensError> {
        if placement.size() != self.size {
            return Err(QueensError::invalid_placement(format!(
                "placement for n = {} added to a set for n = {}",
                placement.size(),
                self.size
            )));
        }
        if !self.index.insert(placement.clone()) {
            return Ok(false);
        }
        self.placements.push(placement);
        Ok(true)
    }

    pub fn contains(&self, placement: &Placement) -> bool {
        self.index.contains(placement)
    }

    /// Board size the placements belong to.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn first(&self) -> Option<&Placement> {
        self.placements.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    pub fn into_vec(self) -> Vec<Placement> {
        self.placements
    }
}

impl PartialEq for SolutionSet {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.placements == other.placements
    }
}

impl Eq for SolutionSet {}

impl IntoIterator for SolutionSet {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_size() {
        assert_eq!(parse_board_size("8"), Ok(8));
        assert_eq!(parse_board_size("  12\n"), Ok(12));
        assert_eq!(parse_board_size("0"), Ok(0));
    }

    #[test]
    fn test_parse_board_size_rejects_garbage() {
        for input in ["-1", "abc", "4.5", ""] {
            assert!(
                matches!(parse_board_size(input), Err(QueensError::InvalidSize { .. })),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_coordinate_attacks() {
        let q = Coordinate::new(2, 3);
        assert!(q.attacks(&Coordinate::new(2, 7)));
        assert!(q.attacks(&Coordinate::new(5, 3)));
        assert!(q.attacks(&Coordinate::new(4, 5)));
        assert!(q.attacks(&Coordinate::new(1, 4)));
        assert!(!q.attacks(&Coordinate::new(4, 4)));
    }

    #[test]
    fn test_check_placement() {
        // The two solutions of the 4x4 board
        assert!(is_valid_placement(&[
            Coordinate::new(2, 1),
            Coordinate::new(4, 2),
            Coordinate::new(1, 3),
            Coordinate::new(3, 4),
        ]));
        assert!(is_valid_placement(&[
            Coordinate::new(3, 1),
            Coordinate::new(1, 2),
            Coordinate::new(4, 3),
            Coordinate::new(2, 4),
        ]));
        assert!(is_valid_placement(&[]));
        assert!(is_valid_placement(&[Coordinate::new(1, 1)]));
    }

    #[test]
    fn test_check_placement_failures() {
        // Shared row
        assert!(check_placement(&[Coordinate::new(1, 1), Coordinate::new(1, 2)]).is_err());
        // Shared diagonal
        assert!(check_placement(&[Coordinate::new(1, 1), Coordinate::new(2, 2)]).is_err());
        // Off the board
        assert!(check_placement(&[Coordinate::new(0, 1)]).is_err());
        assert!(check_placement(&[Coordinate::new(1, 2)]).is_err());

        let err = check_placement(&[
            Coordinate::new(1, 1),
            Coordinate::new(3, 2),
            Coordinate::new(2, 3),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn test_from_coordinates_sorts_by_column() {
        let placement =
            Placement::from_coordinates([(1usize, 3usize), (3, 4), (2, 1), (4, 2)]).unwrap();

        assert_eq!(placement.size(), 4);
        assert_eq!(placement.rows(), vec![2, 4, 1, 3]);
        assert_eq!(placement.row_of(3), Some(1));
        assert_eq!(placement.row_of(0), None);
        assert_eq!(placement.row_of(5), None);
    }

    #[test]
    fn test_from_rows() {
        let placement = Placement::from_rows(&[3, 1, 4, 2]).unwrap();
        assert_eq!(placement.coordinates()[0], Coordinate::new(3, 1));
        assert!(Placement::from_rows(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_placement_display() {
        let placement = Placement::from_rows(&[2, 4, 1, 3]).unwrap();
        assert_eq!(placement.to_string(), "[(2, 1), (4, 2), (1, 3), (3, 4)]");
        assert_eq!(Placement::empty().to_string(), "[]");
    }

    #[test]
    fn test_solution_set_insert() {
        let mut set = SolutionSet::new(4);
        let a = Placement::from_rows(&[2, 4, 1, 3]).unwrap();
        let b = Placement::from_rows(&[3, 1, 4, 2]).unwrap();

        assert_eq!(set.insert(a.clone()), Ok(true));
        assert_eq!(set.insert(b), Ok(true));
        assert_eq!(set.insert(a.clone()), Ok(false));
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&a));

        assert!(set.insert(Placement::empty()).is_err());
    }

    #[test]
    fn test_solution_set_insert_many() {
        let solutions = crate::search::all_solutions(10).into_vec();
        let mut set = SolutionSet::new(10);

        for placement in solutions.iter().chain(solutions.iter()) {
            set.insert(placement.clone()).unwrap();
        }

        assert_eq!(set.len(), 724);
        assert_eq!(set.as_slice(), solutions.as_slice());
        assert!(solutions.iter().all(|p| set.contains(p)));
        assert!(!set.contains(&Placement::empty()));
    }

    #[test]
    fn test_placement_serde_validates() {
        let placement = Placement::from_rows(&[2, 4, 1, 3]).unwrap();
        let json = serde_json::to_string(&placement).unwrap();
        let back: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, placement);

        let bad = r#"[{"row":1,"col":1},{"row":2,"col":2}]"#;
        assert!(serde_json::from_str::<Placement>(bad).is_err());
    }
}
