//! Policies for choosing moves.
//!
//! - `OpponentPolicy`: how the environment picks its reply inside `step`
//! - `AgentPolicy`: how an external caller picks the agent's move
//!
//! Neither policy learns; training algorithms live outside this crate and
//! plug in through `AgentPolicy`.

use crate::core::{Action, Board, GameRng};

// =============================================================================
// Opponent Policy
// =============================================================================

/// Policy for the environment's reply.
pub trait OpponentPolicy: Send + Sync {
    /// Choose one of `actions`, drawing any randomness from `rng`.
    ///
    /// Returns `None` if `actions` is empty.
    fn choose_action(&self, board: &Board, actions: &[Action], rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random opponent policy.
///
/// Selects uniformly from legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_action(&self, _board: &Board, actions: &[Action], rng: &mut GameRng) -> Option<Action> {
        if actions.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..actions.len());
        Some(actions[idx])
    }
}

// =============================================================================
// Agent Policy
// =============================================================================

/// Action chooser for the agent side.
pub trait AgentPolicy {
    /// Choose one of `actions`. Returns `None` to give up.
    fn choose_action(&mut self, board: &Board, actions: &[Action]) -> Option<Action>;
}

impl<F> AgentPolicy for F
where
    F: FnMut(&Board, &[Action]) -> Option<Action>,
{
    fn choose_action(&mut self, board: &Board, actions: &[Action]) -> Option<Action> {
        self(board, actions)
    }
}

/// Agent that plays uniformly at random from its own RNG stream.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl AgentPolicy for RandomAgent {
    fn choose_action(&mut self, _board: &Board, actions: &[Action]) -> Option<Action> {
        self.rng.choose(actions).copied()
    }
}
