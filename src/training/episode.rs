//! Episode recording for an external training loop.
//!
//! An episode records a complete game from the agent's point of view:
//! - The board before each agent decision
//! - The action taken and the reward received
//! - The board handed back after the opponent's reply
//!
//! The learner decides what to do with it; nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameRngState};
use crate::env::{AgentPolicy, NumericalEnv, OpponentPolicy};
use crate::error::Result;
use crate::rules::Outcome;

/// One agent decision and its consequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Board the agent saw.
    pub board: Board,

    /// Action the agent took.
    pub action: Action,

    /// The environment's reply, if the game continued.
    pub opponent_action: Option<Action>,

    /// Reward for the step.
    pub reward: i32,

    /// Board after the step.
    pub next_board: Board,

    /// Whether the step ended the game.
    pub done: bool,
}

/// A complete (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// All agent decisions in order.
    pub transitions: Vec<Transition>,

    /// Final classification. `Ongoing` if the agent stopped early.
    pub outcome: Outcome,

    /// Opponent RNG state when the game started. Restoring it with
    /// [`NumericalEnv::restore_rng`] replays this game for the same agent.
    pub rng_state: GameRngState,
}

impl Episode {
    /// Create an empty episode starting from `rng_state`.
    pub fn new(rng_state: GameRngState) -> Self {
        Self {
            transitions: Vec::new(),
            outcome: Outcome::Ongoing,
            rng_state,
        }
    }

    /// Base seed of the environment that produced the game.
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Add a transition.
    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Number of agent decisions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Undiscounted sum of rewards.
    pub fn total_reward(&self) -> i32 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// The last step ended the game on the agent's move with a line.
    pub fn agent_won(&self) -> bool {
        self.outcome == Outcome::Win
            && self.transitions.last().is_some_and(|t| t.opponent_action.is_none())
    }

    /// The last step ended the game on the opponent's reply with a line.
    pub fn agent_lost(&self) -> bool {
        self.outcome == Outcome::Win
            && self.transitions.last().is_some_and(|t| t.opponent_action.is_some())
    }

    pub fn is_tie(&self) -> bool {
        self.outcome == Outcome::Tie
    }
}

/// Play one game from a fresh board.
///
/// Stops when the game ends or when the agent returns no action; in the
/// latter case the episode's outcome stays `Ongoing`.
///
/// # Errors
///
/// Propagates any error from [`NumericalEnv::step`], e.g. an illegal
/// action chosen by the agent.
pub fn run_episode<O, A>(env: &mut NumericalEnv<O>, agent: &mut A) -> Result<Episode>
where
    O: OpponentPolicy,
    A: AgentPolicy + ?Sized,
{
    let mut board = env.reset();
    let mut episode = Episode::new(env.rng_state());

    while !env.is_done() {
        let actions = env.legal_actions();
        let Some(action) = agent.choose_action(&board, &actions) else {
            tracing::debug!(moves = episode.len(), "agent stopped before the game ended");
            break;
        };

        let result = env.step(action)?;
        episode.push(Transition {
            board,
            action,
            opponent_action: result.opponent_action,
            reward: result.reward,
            next_board: result.board,
            done: result.done,
        });
        board = result.board;
    }

    episode.outcome = env.outcome();
    tracing::debug!(
        outcome = ?episode.outcome,
        moves = episode.len(),
        total_reward = episode.total_reward(),
        "episode finished"
    );
    Ok(episode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EnvConfig, GameRng};
    use crate::env::RandomAgent;

    #[test]
    fn test_episode_creation() {
        let episode = Episode::new(GameRng::new(42).state());
        assert!(episode.is_empty());
        assert_eq!(episode.outcome, Outcome::Ongoing);
        assert_eq!(episode.total_reward(), 0);
        assert!(!episode.agent_won());
        assert!(!episode.agent_lost());
    }

    #[test]
    fn test_run_episode_to_completion() {
        let mut env = NumericalEnv::new(EnvConfig::default());
        let mut agent = RandomAgent::new(1);

        let episode = run_episode(&mut env, &mut agent).unwrap();

        assert!(episode.outcome.is_terminal());
        assert!(!episode.is_empty());
        assert!(episode.len() <= 5);
        assert!(episode.transitions.last().unwrap().done);
        assert!(episode.transitions[..episode.len() - 1].iter().all(|t| !t.done));
        assert_eq!(episode.agent_won() as u8 + episode.agent_lost() as u8 + episode.is_tie() as u8, 1);
    }

    #[test]
    fn test_transitions_chain() {
        let mut env = NumericalEnv::new(EnvConfig::default().with_seed(3));
        let mut agent = RandomAgent::new(3);

        let episode = run_episode(&mut env, &mut agent).unwrap();

        assert_eq!(episode.transitions[0].board, Board::new());
        for pair in episode.transitions.windows(2) {
            assert_eq!(pair[0].next_board, pair[1].board);
        }
    }

    #[test]
    fn test_agent_stops_early() {
        let mut env = NumericalEnv::new(EnvConfig::default());
        let mut quitter = |_: &Board, _: &[Action]| -> Option<Action> { None };

        let episode = run_episode(&mut env, &mut quitter).unwrap();
        assert!(episode.is_empty());
        assert_eq!(episode.outcome, Outcome::Ongoing);
    }

    #[test]
    fn test_rng_state_replays_later_episode() {
        let first_action = |_: &Board, actions: &[Action]| -> Option<Action> { actions.first().copied() };

        let mut env = NumericalEnv::new(EnvConfig::default().with_seed(11));
        let mut agent = first_action;
        let episodes: Vec<Episode> = (0..4)
            .map(|_| run_episode(&mut env, &mut agent).unwrap())
            .collect();
        assert!(episodes.iter().all(|e| e.seed() == 11));
        assert_ne!(episodes[0].rng_state, episodes[3].rng_state);

        let mut replay = NumericalEnv::new(EnvConfig::default().with_seed(11));
        replay.restore_rng(&episodes[3].rng_state);
        let again = run_episode(&mut replay, &mut agent).unwrap();
        assert_eq!(again, episodes[3]);
    }

    #[test]
    fn test_serialization() {
        let mut env = NumericalEnv::new(EnvConfig::default());
        let episode = run_episode(&mut env, &mut RandomAgent::new(9)).unwrap();

        let json = serde_json::to_string(&episode).unwrap();
        let deserialized: Episode = serde_json::from_str(&json).unwrap();
        assert_eq!(episode, deserialized);
    }
}
