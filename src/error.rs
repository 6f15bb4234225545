//! Error types for the environment.

use thiserror::Error;

use crate::core::{Action, Board, Side};
use crate::rules::Outcome;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalReason {
    /// Target cell already holds a value.
    PositionOccupied,
    /// Value is already placed somewhere on the board.
    ValueUsed,
    /// Value belongs to the other side (odd = agent, even = environment).
    WrongParity,
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalReason::PositionOccupied => write!(f, "position is occupied"),
            IllegalReason::ValueUsed => write!(f, "value is already used"),
            IllegalReason::WrongParity => write!(f, "value has the wrong parity"),
        }
    }
}

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal action {action} for {side}: {reason}")]
    IllegalAction {
        action: Action,
        side: Side,
        reason: IllegalReason,
    },

    #[error("non-terminal board has no environment actions:\n{board}")]
    EmptyActionSpace { board: Board },

    #[error("opponent declined to move with {available} legal actions:\n{board}")]
    OpponentRefused { board: Board, available: usize },

    #[error("game already over ({outcome:?})")]
    GameOver { outcome: Outcome },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("value {value} is out of range (must be 1-9)")]
    InvalidValue { value: u8 },

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
