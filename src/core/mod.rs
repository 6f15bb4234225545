//! Core types: board, positions, values, actions, RNG, configuration.
//!
//! Nothing here knows the rules of the game beyond the board's own
//! invariants (cells in `0..=8`, values in `1..=9`, no value twice).

pub mod action;
pub mod board;
pub mod config;
pub mod rng;

pub use action::{Action, Side, ACTION_COUNT};
pub use board::{Board, Position, Value, CELL_COUNT};
pub use config::{EnvConfig, RewardConfig};
pub use rng::{GameRng, GameRngState};
