//! The environment: step protocol, opponent policy, and the stateful wrapper.
//!
//! `transition::step` is the pure transition over an explicit board and RNG.
//! `NumericalEnv` owns a board and an RNG and commits each successful step.

pub mod environment;
pub mod policy;
pub mod transition;

pub use environment::NumericalEnv;
pub use policy::{AgentPolicy, OpponentPolicy, RandomAgent, UniformOpponent};
pub use transition::{step, StepResult};
