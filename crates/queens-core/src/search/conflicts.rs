/// Rows and diagonals occupied by the queens placed so far.
///
/// Indices are 0-based. A queen at `(row, col)` occupies row `row`, the
/// descending diagonal `row - col + n - 1` and the ascending diagonal
/// `row + col`, so each check is a constant-time lookup.
#[derive(Debug, Clone)]
pub(crate) struct ConflictSets {
    n: usize,
    rows: Vec<bool>,
    descending: Vec<bool>,
    ascending: Vec<bool>,
}

impl ConflictSets {
    pub(crate) fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            rows: vec![false; n],
            descending: vec![false; diagonals],
            ascending: vec![false; diagonals],
        }
    }

    fn descending_index(&self, row: usize, col: usize) -> usize {
        row + self.n - 1 - col
    }

    /// Whether a queen could stand at `(row, col)` without being attacked.
    pub(crate) fn is_free(&self, row: usize, col: usize) -> bool {
        !self.rows[row]
            && !self.descending[self.descending_index(row, col)]
            && !self.ascending[row + col]
    }

    /// Mark the lines through `(row, col)` as occupied.
    pub(crate) fn place(&mut self, row: usize, col: usize) {
        debug_assert!(self.is_free(row, col));
        let descending = self.descending_index(row, col);
        self.rows[row] = true;
        self.descending[descending] = true;
        self.ascending[row + col] = true;
    }

    /// Release the lines through `(row, col)`.
    pub(crate) fn remove(&mut self, row: usize, col: usize) {
        let descending = self.descending_index(row, col);
        self.rows[row] = false;
        self.descending[descending] = false;
        self.ascending[row + col] = false;
    }

    /// First free row of `col` at or after `from`.
    pub(crate) fn next_free_row(&self, col: usize, from: usize) -> Option<usize> {
        (from..self.n).find(|&row| self.is_free(row, col))
    }
}
