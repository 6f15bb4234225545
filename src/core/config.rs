//! Environment configuration.

use serde::{Deserialize, Serialize};

/// Rewards handed to the agent by `step`.
///
/// All rewards are from the agent's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Agent's move completes a line.
    pub win: i32,
    /// Environment's reply completes a line.
    pub loss: i32,
    /// Board fills up with no line.
    pub tie: i32,
    /// Game continues after the environment's reply.
    pub step: i32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win: 10,
            loss: -10,
            tie: 0,
            step: -1,
        }
    }
}

impl RewardConfig {
    pub fn with_win(mut self, reward: i32) -> Self {
        self.win = reward;
        self
    }

    pub fn with_loss(mut self, reward: i32) -> Self {
        self.loss = reward;
        self
    }

    pub fn with_tie(mut self, reward: i32) -> Self {
        self.tie = reward;
        self
    }

    pub fn with_step(mut self, reward: i32) -> Self {
        self.step = reward;
        self
    }
}

/// Environment configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Reward schedule.
    pub rewards: RewardConfig,

    /// Seed for the opponent's RNG.
    /// Same seed and same agent actions replay the same game.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            rewards: RewardConfig::default(),
            seed: 42,
        }
    }
}

impl EnvConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom rewards.
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }
}
