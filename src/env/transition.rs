//! The step protocol: agent move, automatic environment reply, reward.
//!
//! 1. Apply the agent's (odd) action. A line summing to 15 is a win for
//!    the agent; a full board is a tie. Either ends the step.
//! 2. Otherwise the opponent policy picks one environment (even) action
//!    from the legal set, drawing from the supplied RNG.
//! 3. A line after the reply is a loss; a full board is a tie; anything
//!    else costs the per-step reward.
//!
//! The input board is never modified. The whole step runs on a copy, so a
//! failed step leaves the caller's state as it was.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameRng, RewardConfig, Side};
use crate::error::{Error, Result};
use crate::rules::{self, Outcome};

use super::policy::OpponentPolicy;

/// Result of one `step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the agent's move and, if played, the reply.
    pub board: Board,

    /// Reward for the agent.
    pub reward: i32,

    /// Whether the game is over.
    pub done: bool,

    /// Classification of `board`.
    pub outcome: Outcome,

    /// The environment's reply, `None` if the agent's move ended the game.
    pub opponent_action: Option<Action>,
}

/// Run one step from `board`.
///
/// # Errors
///
/// - [`Error::GameOver`] if `board` is already terminal.
/// - [`Error::IllegalAction`] if `action` is not a legal agent action, or
///   the opponent policy returns an illegal reply.
/// - [`Error::EmptyActionSpace`] if the game continues but the environment
///   has no legal action.
/// - [`Error::OpponentRefused`] if the opponent policy returns no reply
///   while legal actions exist.
pub fn step<O>(
    board: &Board,
    action: Action,
    rng: &mut GameRng,
    opponent: &O,
    rewards: &RewardConfig,
) -> Result<StepResult>
where
    O: OpponentPolicy + ?Sized,
{
    let current = rules::outcome(board);
    if current.is_terminal() {
        return Err(Error::GameOver { outcome: current });
    }

    let mut next = *board;
    rules::apply(&mut next, Side::Agent, action)?;

    let after_agent = rules::outcome(&next);
    let reward = match after_agent {
        Outcome::Win => Some(rewards.win),
        Outcome::Tie => Some(rewards.tie),
        Outcome::Ongoing => None,
    };
    if let Some(reward) = reward {
        tracing::debug!(outcome = ?after_agent, reward, board = %next.key(), "game ended on agent move");
        return Ok(StepResult {
            board: next,
            reward,
            done: true,
            outcome: after_agent,
            opponent_action: None,
        });
    }

    let actions = rules::legal_actions(&next, Side::Environment);
    if actions.is_empty() {
        tracing::error!(board = %next.key(), "no environment action on a non-terminal board");
        return Err(Error::EmptyActionSpace { board: next });
    }
    let Some(reply) = opponent.choose_action(&next, &actions, rng) else {
        tracing::warn!(board = %next.key(), available = actions.len(), "opponent returned no reply");
        return Err(Error::OpponentRefused { board: next, available: actions.len() });
    };
    rules::apply(&mut next, Side::Environment, reply)?;

    let after_reply = rules::outcome(&next);
    let reward = match after_reply {
        Outcome::Win => rewards.loss,
        Outcome::Tie => rewards.tie,
        Outcome::Ongoing => rewards.step,
    };
    let done = after_reply.is_terminal();
    if done {
        tracing::debug!(outcome = ?after_reply, reward, board = %next.key(), "game ended on environment move");
    }

    Ok(StepResult {
        board: next,
        reward,
        done,
        outcome: after_reply,
        opponent_action: Some(reply),
    })
}
