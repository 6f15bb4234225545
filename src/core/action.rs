//! Action representation: a value placed at a position, and the side placing it.

use serde::{Deserialize, Serialize};

use super::board::{Position, Value, CELL_COUNT};
use crate::error::{Error, Result};

/// Number of distinct (position, value) pairs.
pub const ACTION_COUNT: usize = CELL_COUNT * 9;

/// The two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Places odd values (1, 3, 5, 7, 9).
    Agent,
    /// Places even values (2, 4, 6, 8).
    Environment,
}

impl Side {
    /// Check whether this side may place `value`.
    #[must_use]
    pub const fn owns(self, value: Value) -> bool {
        match self {
            Side::Agent => value.is_odd(),
            Side::Environment => !value.is_odd(),
        }
    }

    /// The side that places `value`.
    #[must_use]
    pub const fn of(value: Value) -> Self {
        if value.is_odd() {
            Side::Agent
        } else {
            Side::Environment
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Agent => Side::Environment,
            Side::Environment => Side::Agent,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Agent => write!(f, "Agent"),
            Side::Environment => write!(f, "Environment"),
        }
    }
}

/// Place `value` at `position`.
///
/// An action says nothing about legality; see [`crate::rules::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub position: Position,
    pub value: Value,
}

impl Action {
    #[must_use]
    pub const fn new(position: Position, value: Value) -> Self {
        Self { position, value }
    }

    /// Build an action from raw numbers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] or [`Error::InvalidValue`] if
    /// either number is out of range.
    pub fn from_raw(position: usize, value: u8) -> Result<Self> {
        Ok(Self::new(Position::new(position)?, Value::new(value)?))
    }

    /// Flat index `position * 9 + (value - 1)`, in `0..81`.
    ///
    /// Ordering matches the position-major, value-minor order of
    /// [`crate::rules::action_space`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.position.index() * 9 + (self.value.get() as usize - 1)
    }

    /// Inverse of [`Action::index`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `index >= 81`.
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= ACTION_COUNT {
            return Err(Error::InvalidPosition { position: index / 9 });
        }
        Self::from_raw(index / 9, (index % 9) as u8 + 1)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.value, self.position)
    }
}
