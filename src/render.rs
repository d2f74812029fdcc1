//! Text rendering of boards.
//!
//! One line per row, row 0 first. Each cell is `.` when empty, `q` for a
//! queen nobody attacks and `Q` for a queen in at least one conflict.

use crate::board::{queen_is_conflicted, Board};
use std::fmt;

/// Renders `board` as a grid, lines separated by `\n` with no trailing newline.
pub fn render(board: &Board) -> String {
    board.to_string()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        let conflicted: Vec<bool> = (0..n).map(|c| queen_is_conflicted(self, c)).collect();

        for row in 0..n {
            if row > 0 {
                writeln!(f)?;
            }
            for (column, &queen_row) in self.rows().iter().enumerate() {
                let cell = match (queen_row == row, conflicted[column]) {
                    (false, _) => '.',
                    (true, false) => 'q',
                    (true, true) => 'Q',
                };
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_solution() {
        let board = Board::new(vec![1, 3, 0, 2]).unwrap();
        assert_eq!(render(&board), "..q.\nq...\n...q\n.q..");
    }

    #[test]
    fn test_render_marks_conflicts() {
        // Columns 0 and 2 share row 0; column 1 is unattacked.
        let board = Board::new(vec![0, 2, 0]).unwrap();
        assert_eq!(render(&board), "Q.Q\n...\n.q.");
    }

    #[test]
    fn test_render_single_queen() {
        assert_eq!(render(&Board::new(vec![0]).unwrap()), "q");
    }
}
