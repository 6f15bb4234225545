//! Win and terminal-state detection.
//!
//! A board is won when any of its eight magic lines (3 rows, 3 columns,
//! 2 diagonals) sums to exactly 15. Empty cells contribute 0 to a sum and
//! are never skipped. A single value cannot reach 15, but two can
//! (9 + 6, 8 + 7), so a line with one empty cell may already be a win.

use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Target sum for a winning line.
pub const WINNING_SUM: u32 = 15;

/// Magic line indices on the 3×3 board.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and no line sums to 15.
    Ongoing,
    /// Some line sums to 15. The side that made the last move won.
    Win,
    /// Board is full and no line sums to 15.
    Tie,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// First line (in [`LINES`] order) summing to 15, if any.
#[must_use]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES
        .iter()
        .copied()
        .find(|line| board.sum_of(line) == WINNING_SUM)
}

/// Check whether any row, column or diagonal sums to exactly 15.
#[must_use]
pub fn is_winning(board: &Board) -> bool {
    winning_line(board).is_some()
}

/// Classify a board. Win is checked before Tie, so a full board with a
/// winning line is a Win.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    if is_winning(board) {
        Outcome::Win
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

/// Returns `(true, Win)`, `(true, Tie)` or `(false, Ongoing)`.
#[must_use]
pub fn is_terminal(board: &Board) -> (bool, Outcome) {
    let outcome = outcome(board);
    (outcome.is_terminal(), outcome)
}
