//! N-Queens placement generation.
//!
//! Two ways of placing `n` non-attacking queens on an `n`x`n` board:
//!
//! - [`first_solution`]: one placement in O(n) by closed-form construction
//! - [`all_solutions`]: every placement by exhaustive backtracking search
//!
//! Coordinates are 1-based throughout the public API.
//!
//! # Example
//!
//! ```
//! use queens_core::{first_solution, solve, Mode};
//!
//! let placement = first_solution(8).unwrap();
//! assert_eq!(placement.len(), 8);
//!
//! let all = solve(8, Mode::All).unwrap();
//! assert_eq!(all.len(), 92);
//! ```

pub mod board;
pub mod cache;
pub mod closed_form;
pub mod error;
pub mod mode;
pub mod reference;
pub mod search;

pub use board::{check_placement, is_valid_placement, parse_board_size, Coordinate, Placement, SolutionSet};
pub use cache::{MemoryCache, NoopCache, PlacementCache};
pub use closed_form::{explicit_solution, first_solution};
pub use error::QueensError;
pub use mode::{solve, Mode, Solution, Solver};
pub use reference::{known_solution_count, KNOWN_SOLUTION_COUNTS};
pub use search::{all_solutions, count_solutions, Search, SearchStats};

#[cfg(feature = "parallel")]
pub use search::{all_solutions_parallel, count_solutions_parallel};
