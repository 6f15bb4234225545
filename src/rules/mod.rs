//! Game rules: legality, action-space enumeration, and terminal detection.
//!
//! Everything here is a pure function of a `Board`. The environment calls
//! into these rules but never re-implements them.

pub mod legality;
pub mod terminal;

pub use legality::{
    action_space, allowed_positions, allowed_values, apply, legal_actions, validate,
    ActionSpace, AllowedValues,
};
pub use terminal::{is_terminal, is_winning, outcome, winning_line, Outcome, LINES, WINNING_SUM};
