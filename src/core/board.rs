//! Board representation: nine cells laid out as a 3×3 grid.
//!
//! ## Layout
//!
//! Cells are stored row-major; position `p` sits at row `p / 3`,
//! column `p % 3`:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! Each cell is either empty or holds a [`Value`] in `1..=9`, and no value
//! appears twice. Constructors that accept raw input enforce both rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of a cell, `0..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// Create a position, validating it is on the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `index >= 9`.
    pub fn new(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(Error::InvalidPosition { position: index })
        }
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Grid row (0 = top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Grid column (0 = left).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }

    /// Iterate over all positions in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT as u8).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number placed on the board, `1..=9`.
///
/// Odd values belong to the agent, even values to the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Value(u8);

impl Value {
    /// Create a value, validating the `1..=9` range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `value` is 0 or greater than 9.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidValue { value })
        }
    }

    /// Get the raw number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    /// Iterate over all values in ascending order.
    pub fn all() -> impl Iterator<Item = Value> {
        (1..=9u8).map(Value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The game board.
///
/// `Board` is `Copy` (nine bytes), so transitions can work on a scratch copy
/// and hand it back only once every check has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Value>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cell contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for numbers outside `1..=9` and
    /// [`Error::InvalidBoard`] if a value appears more than once.
    pub fn from_cells(raw: [Option<u8>; CELL_COUNT]) -> Result<Self> {
        let mut board = Self::new();
        for (index, cell) in raw.into_iter().enumerate() {
            if let Some(n) = cell {
                let value = Value::new(n)?;
                if board.contains(value) {
                    return Err(Error::InvalidBoard {
                        reason: format!("value {value} appears more than once"),
                    });
                }
                board.cells[index] = Some(value);
            }
        }
        Ok(board)
    }

    /// Get the value at a position, if any.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Value> {
        self.cells[position.index()]
    }

    /// Raw view of all cells in position order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Value>; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.cells[position.index()].is_none()
    }

    /// Check whether a value has already been placed.
    #[must_use]
    pub fn contains(&self, value: Value) -> bool {
        self.cells.iter().any(|&c| c == Some(value))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Sum of the cells at `indices`, with empty cells counting as 0.
    ///
    /// Every index must be below [`CELL_COUNT`].
    #[must_use]
    pub(crate) fn sum_of(&self, indices: &[usize]) -> u32 {
        indices
            .iter()
            .map(|&i| self.cells[i].map_or(0, |v| u32::from(v.get())))
            .sum()
    }

    /// Compact nine-character key, `.` for empty cells.
    ///
    /// Stable across runs; suitable as a state key for tabular learners.
    #[must_use]
    pub fn key(&self) -> String {
        self.cells
            .iter()
            .map(|c| match c {
                Some(v) => char::from(b'0' + v.get()),
                None => '.',
            })
            .collect()
    }

    /// Write a value without any legality check.
    ///
    /// Only `rules::apply` calls this, after validation.
    pub(crate) fn place(&mut self, position: Position, value: Value) {
        self.cells[position.index()] = Some(value);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| match self.cells[row * 3 + col] {
                    Some(v) => v.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cells from `1`-`9`, with `.` or `_` for empty.
    ///
    /// Whitespace, `|` and `/` are ignored so boards can be written as
    /// `"492/357/816"` or `"4 9 2 | 3 5 7 | 8 1 6"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut raw = [None; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars() {
            if ch.is_whitespace() || ch == '|' || ch == '/' {
                continue;
            }
            if count == CELL_COUNT {
                return Err(Error::InvalidBoard {
                    reason: format!("more than {CELL_COUNT} cells in '{s}'"),
                });
            }
            raw[count] = match ch {
                '.' | '_' => None,
                '1'..='9' => Some(ch as u8 - b'0'),
                other => {
                    return Err(Error::InvalidBoard {
                        reason: format!("invalid character '{other}' in '{s}'"),
                    })
                }
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(Error::InvalidBoard {
                reason: format!("expected {CELL_COUNT} cells, got {count} in '{s}'"),
            });
        }

        Self::from_cells(raw)
    }
}
