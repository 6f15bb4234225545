//! Episode collection for an external learner.
//!
//! ## Overview
//!
//! - **Episode**: Records a complete game as agent-side transitions
//! - **run_episode**: Plays one game with any `AgentPolicy`
//! - **EpisodeStats**: Aggregates win/loss/tie counts and rewards
//!
//! ## Usage
//!
//! ```
//! use numerical_ttt::env::{NumericalEnv, RandomAgent};
//! use numerical_ttt::training::{run_episode, EpisodeStats};
//! use numerical_ttt::EnvConfig;
//!
//! let mut env = NumericalEnv::new(EnvConfig::default().with_seed(1));
//! let mut agent = RandomAgent::new(2);
//! let mut stats = EpisodeStats::new();
//!
//! for _ in 0..10 {
//!     let episode = run_episode(&mut env, &mut agent)?;
//!     stats.record(&episode);
//! }
//! assert_eq!(stats.episodes, 10);
//! # Ok::<(), numerical_ttt::Error>(())
//! ```

pub mod episode;
pub mod stats;

pub use episode::{run_episode, Episode, Transition};
pub use stats::EpisodeStats;
