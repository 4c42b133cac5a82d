//! Text rendering of placements.

use queens_core::Placement;

/// Draw `placement` as an ASCII board, row 1 on top.
///
/// ```text
///    1 2 3 4
///  1 . . Q .
///  2 Q . . .
///  3 . . . Q
///  4 . Q . .
/// ```
pub fn board(placement: &Placement) -> String {
    let n = placement.size();
    let width = n.to_string().len();
    let rows = placement.rows();
    let mut out = String::new();

    out.push_str(&" ".repeat(width + 1));
    for col in 1..=n {
        out.push_str(&format!(" {:>width$}", col, width = width));
    }
    out.push('\n');

    for row in 1..=n {
        out.push_str(&format!(" {:>width$}", row, width = width));
        for &queen_row in &rows {
            let cell = if queen_row == row { "Q" } else { "." };
            out.push_str(&format!(" {:>width$}", cell, width = width));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_four() {
        let placement = Placement::from_rows(&[2, 4, 1, 3]).unwrap();
        let expected = "   1 2 3 4\n 1 . . Q .\n 2 Q . . .\n 3 . . . Q\n 4 . Q . .\n";
        assert_eq!(board(&placement), expected);
    }

    #[test]
    fn test_board_wide_labels() {
        let placement = queens_core::first_solution(10).unwrap();
        let rendered = board(&placement);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[0].ends_with("10"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert_eq!(rendered.matches('Q').count(), 10);
    }

    #[test]
    fn test_board_empty() {
        assert_eq!(board(&Placement::empty()), "  \n");
    }
}
