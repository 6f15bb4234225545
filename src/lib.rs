//! # numerical-ttt
//!
//! Numerical Tic-Tac-Toe as a turn-based environment for RL agents.
//!
//! ## Rules
//!
//! 1. The agent places odd numbers (1, 3, 5, 7, 9), the environment even
//!    numbers (2, 4, 6, 8), on a 3×3 board. Each number is used at most once.
//!
//! 2. A row, column or diagonal summing to 15 wins for whoever made the
//!    last move. A full board with no such line is a tie.
//!
//! 3. The environment replies uniformly at random by default. Its RNG is
//!    seeded and passed explicitly, so games replay exactly.
//!
//! ## Rewards
//!
//! Per `step`: +10 if the agent's move wins, -10 if the reply wins, 0 for
//! a tie, -1 otherwise. See `RewardConfig`.
//!
//! ## Modules
//!
//! - `core`: Board, positions, values, actions, RNG, configuration
//! - `rules`: Legality, action-space enumeration, win/terminal detection
//! - `env`: Step protocol, opponent/agent policies, `NumericalEnv`
//! - `training`: Episode collection and statistics
//! - `error`: Crate error type

pub mod core;
pub mod env;
pub mod error;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, EnvConfig, GameRng, GameRngState, Position, RewardConfig, Side, Value,
};

pub use crate::rules::{
    action_space, allowed_positions, allowed_values, apply, is_terminal, is_winning, ActionSpace,
    AllowedValues, Outcome,
};

pub use crate::env::{
    step, AgentPolicy, NumericalEnv, OpponentPolicy, RandomAgent, StepResult, UniformOpponent,
};

pub use crate::error::{Error, IllegalReason, Result};

pub use crate::training::{run_episode, Episode, EpisodeStats, Transition};
