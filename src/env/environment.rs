//! Stateful environment: owns one board and one RNG stream.

use crate::core::{Action, Board, EnvConfig, GameRng, GameRngState, Side};
use crate::error::Result;
use crate::rules::{self, ActionSpace, Outcome};

use super::policy::{OpponentPolicy, UniformOpponent};
use super::transition::{self, StepResult};

/// Numerical Tic-Tac-Toe environment.
///
/// The agent places odd numbers, the opponent even numbers; each `step`
/// plays one agent move followed by the opponent's reply.
///
/// ```
/// use numerical_ttt::{Action, EnvConfig, NumericalEnv};
///
/// let mut env = NumericalEnv::new(EnvConfig::default().with_seed(7));
/// env.reset();
///
/// let result = env.step(Action::from_raw(4, 5)?)?;
/// assert_eq!(result.board.occupied_count(), 2);
/// assert_eq!(result.reward, -1);
/// # Ok::<(), numerical_ttt::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct NumericalEnv<O = UniformOpponent> {
    config: EnvConfig,
    board: Board,
    rng: GameRng,
    opponent: O,
}

impl NumericalEnv<UniformOpponent> {
    /// Create an environment with a uniform random opponent.
    #[must_use]
    pub fn new(config: EnvConfig) -> Self {
        Self::with_opponent(config, UniformOpponent)
    }
}

impl<O: OpponentPolicy> NumericalEnv<O> {
    /// Create an environment with a custom opponent policy.
    #[must_use]
    pub fn with_opponent(config: EnvConfig, opponent: O) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            board: Board::new(),
            config,
            opponent,
        }
    }

    /// Start a new game and return the empty board.
    ///
    /// The RNG stream carries on from the previous game, so a sequence of
    /// games is reproducible from the seed alone.
    pub fn reset(&mut self) -> Board {
        self.board = Board::new();
        tracing::debug!(seed = self.config.seed, "environment reset");
        self.board
    }

    /// Play `action` for the agent, then the opponent's reply.
    ///
    /// The environment's board is only replaced when the step succeeds.
    ///
    /// # Errors
    ///
    /// See [`transition::step`].
    pub fn step(&mut self, action: Action) -> Result<StepResult> {
        let result = transition::step(
            &self.board,
            action,
            &mut self.rng,
            &self.opponent,
            &self.config.rewards,
        )?;
        self.board = result.board;
        Ok(result)
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Legal agent actions on the current board.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        rules::legal_actions(&self.board, Side::Agent)
    }

    /// Legal actions for both sides on the current board.
    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        rules::action_space(&self.board)
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Snapshot of the opponent's RNG for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume the opponent's RNG from a snapshot.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}

impl<O: OpponentPolicy + Clone> NumericalEnv<O> {
    /// Create an independent environment for a parallel game.
    ///
    /// The new environment starts from an empty board and draws from a
    /// forked RNG stream; nothing is shared with `self`.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let rng = self.rng.fork();
        Self {
            config: self.config.clone().with_seed(rng.seed()),
            board: Board::new(),
            rng,
            opponent: self.opponent.clone(),
        }
    }
}
