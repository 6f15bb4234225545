//! Aggregate results over many episodes.

use serde::{Deserialize, Serialize};

use super::episode::Episode;

/// Win/loss/tie counts and reward totals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Episodes recorded.
    pub episodes: u32,

    /// Agent completed a line.
    pub wins: u32,

    /// Opponent completed a line.
    pub losses: u32,

    pub ties: u32,

    /// Episodes the agent stopped before the game ended.
    pub abandoned: u32,

    /// Sum of every episode's total reward.
    pub total_reward: i64,

    /// Sum of every episode's length.
    pub total_moves: u64,
}

impl EpisodeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one episode.
    pub fn record(&mut self, episode: &Episode) {
        self.episodes += 1;
        if episode.agent_won() {
            self.wins += 1;
        } else if episode.agent_lost() {
            self.losses += 1;
        } else if episode.is_tie() {
            self.ties += 1;
        } else {
            self.abandoned += 1;
        }
        self.total_reward += i64::from(episode.total_reward());
        self.total_moves += episode.len() as u64;
    }

    /// Fraction of episodes won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.episodes)
        }
    }

    /// Mean total reward per episode.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward as f64 / f64::from(self.episodes)
        }
    }

    /// Mean agent moves per episode.
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.episodes)
        }
    }
}

impl std::fmt::Display for EpisodeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} episodes: {} won, {} lost, {} tied, mean reward {:.2}",
            self.episodes,
            self.wins,
            self.losses,
            self.ties,
            self.mean_reward()
        )
    }
}
