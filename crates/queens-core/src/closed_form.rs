//! Closed-form construction of a single placement.
//!
//! Even boards are solved directly by the constructions of Hoffman, Loessi
//! and Moore (1969) and Bernhardsson (1991), which split on `n mod 6`. Odd
//! boards reuse the construction for `n - 1` and put the last queen in the
//! free corner `(n, n)`.

use log::{debug, trace};

use crate::board::{Coordinate, Placement};
use crate::error::QueensError;

/// Build the explicit placement for an even board size `n >= 4`.
///
/// Any other `n` is rejected with [`QueensError::OutOfDomain`]: for `n = 2`
/// the formula yields an attacking placement, and odd sizes are handled by
/// [`first_solution`].
pub fn explicit_solution(n: usize) -> Result<Placement, QueensError> {
    if n < 4 || n % 2 != 0 {
        return Err(QueensError::OutOfDomain { n });
    }

    Ok(Placement::from_solver(construct(n)))
}

/// Return one placement for any board size that admits one.
///
/// - `n = 0` yields the empty placement and `n = 1` the single queen `(1, 1)`.
/// - `n = 2` and `n = 3` have no placement and are rejected.
/// - Even `n >= 4` is [`explicit_solution`] unchanged.
/// - Odd `n >= 5` extends `explicit_solution(n - 1)` with `(n, n)`.
pub fn first_solution(n: usize) -> Result<Placement, QueensError> {
    match n {
        0 => Ok(Placement::empty()),
        1 => Ok(Placement::from_solver(vec![Coordinate::new(1, 1)])),
        2 | 3 => Err(QueensError::OutOfDomain { n }),
        _ if n % 2 == 0 => explicit_solution(n),
        _ => {
            debug!("Reducing odd board {} to {}", n, n - 1);
            // The even construction never touches row n or column n.
            let mut queens = construct(n - 1);
            queens.push(Coordinate::new(n, n));
            Ok(Placement::from_solver(queens))
        }
    }
}

/// Queens for even `n >= 4`, in construction order.
fn construct(n: usize) -> Vec<Coordinate> {
    let half = n / 2;
    let mut queens = vec![Coordinate::new(0, 0); n];

    if n % 6 != 2 {
        debug!("Explicit construction for n = {} (n mod 6 = {})", n, n % 6);
        for i in 1..=half {
            queens[i - 1] = Coordinate::new(i, 2 * i);
            queens[i - 1 + half] = Coordinate::new(half + i, 2 * i - 1);
        }
    } else {
        debug!("Explicit construction for n = {} (n mod 6 = 2)", n);
        for i in 1..=half {
            let shift = (2 * (i - 1) + half - 1) % n;
            queens[i - 1] = Coordinate::new(i, 1 + shift);
            queens[i - 1 + half] = Coordinate::new(n + 1 - i, n - shift);
        }
    }

    trace!("Constructed {:?}", queens);
    queens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::check_placement;

    #[test]
    fn test_explicit_solution_n4() {
        let placement = explicit_solution(4).unwrap();
        // (1,2) (2,4) (3,1) (4,3) ordered by column
        assert_eq!(placement.rows(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_explicit_solution_n8_uses_shifted_branch() {
        let placement = explicit_solution(8).unwrap();
        assert_eq!(placement.size(), 8);
        // Column order of the mod-6 = 2 construction
        assert_eq!(placement.rows(), vec![6, 4, 7, 1, 8, 2, 5, 3]);
        check_placement(placement.coordinates()).unwrap();
    }

    #[test]
    fn test_explicit_solution_even_sizes() {
        for n in (4..=30).step_by(2) {
            let placement = explicit_solution(n).unwrap();
            assert_eq!(placement.len(), n);
            if let Err(e) = check_placement(placement.coordinates()) {
                panic!("explicit_solution({}) is invalid: {}", n, e);
            }
        }
    }

    #[test]
    fn test_explicit_solution_large() {
        for n in [98, 100, 254, 1000] {
            let placement = explicit_solution(n).unwrap();
            check_placement(placement.coordinates()).unwrap();
        }
    }

    #[test]
    fn test_explicit_solution_rejects_out_of_domain() {
        for n in [0, 1, 2, 3, 5, 7, 11] {
            assert_eq!(explicit_solution(n), Err(QueensError::OutOfDomain { n }));
        }
    }

    #[test]
    fn test_first_solution_odd_sizes() {
        for n in (5..=31).step_by(2) {
            let placement = first_solution(n).unwrap();
            assert_eq!(placement.len(), n);
            assert_eq!(placement.row_of(n), Some(n));
            if let Err(e) = check_placement(placement.coordinates()) {
                panic!("first_solution({}) is invalid: {}", n, e);
            }
        }
    }

    #[test]
    fn test_first_solution_even_matches_explicit() {
        for n in (4..=20).step_by(2) {
            assert_eq!(first_solution(n).unwrap(), explicit_solution(n).unwrap());
        }
    }

    #[test]
    fn test_first_solution_small_boards() {
        assert_eq!(first_solution(0).unwrap(), Placement::empty());
        assert_eq!(
            first_solution(1).unwrap().coordinates(),
            &[Coordinate::new(1, 1)]
        );
        assert_eq!(first_solution(2), Err(QueensError::OutOfDomain { n: 2 }));
        assert_eq!(first_solution(3), Err(QueensError::OutOfDomain { n: 3 }));
    }
}
