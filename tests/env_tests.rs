//! Environment integration tests: step protocol, rewards, determinism.

use numerical_ttt::env::{step, NumericalEnv, OpponentPolicy, RandomAgent, UniformOpponent};
use numerical_ttt::training::{run_episode, EpisodeStats};
use numerical_ttt::{
    Action, Board, EnvConfig, Error, GameRng, Outcome, Position, RewardConfig, Side, Value,
};

fn action(position: usize, value: u8) -> Action {
    Action::from_raw(position, value).unwrap()
}

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

// =============================================================================
// Step Protocol
// =============================================================================

#[test]
fn test_center_five_continues() {
    for seed in 0..20 {
        let mut env = NumericalEnv::new(EnvConfig::default().with_seed(seed));
        env.reset();

        let result = env.step(action(4, 5)).unwrap();

        // 5 plus one even value can never sum to 15.
        assert_eq!(result.reward, -1);
        assert!(!result.done);
        assert_eq!(result.outcome, Outcome::Ongoing);
        assert_eq!(result.board.occupied_count(), 2);

        let reply = result.opponent_action.unwrap();
        assert!(Side::Environment.owns(reply.value));
        assert_ne!(reply.position.index(), 4);
    }
}

#[test]
fn test_agent_win_ends_step_without_reply() {
    // 4 + 9 + 2 = 15 once 9 lands at 1
    let b = board("4.2......");
    let mut rng = GameRng::new(0);
    let before = rng.state();

    let result = step(&b, action(1, 9), &mut rng, &UniformOpponent, &RewardConfig::default()).unwrap();

    assert_eq!(result.reward, 10);
    assert!(result.done);
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.opponent_action, None);
    assert_eq!(result.board.key(), "492......");
    // No randomness consumed.
    assert_eq!(rng.state(), before);
}

#[test]
fn test_illegal_action_surfaces_immediately() {
    let mut env = NumericalEnv::new(EnvConfig::default());
    env.step(action(0, 1)).unwrap();

    assert!(matches!(env.step(action(0, 3)), Err(Error::IllegalAction { .. })));
    assert!(matches!(env.step(action(1, 1)), Err(Error::IllegalAction { .. })));
    assert!(matches!(env.step(action(1, 2)), Err(Error::IllegalAction { .. })));
}

#[test]
fn test_step_after_game_over() {
    let mut env = NumericalEnv::new(EnvConfig::default());
    let mut agent = RandomAgent::new(5);
    run_episode(&mut env, &mut agent).unwrap();
    assert!(env.is_done());

    let err = env.step(action(0, 1)).unwrap_err();
    assert!(matches!(err, Error::GameOver { .. }));
}

/// Opponent that always returns nothing.
struct SilentOpponent;

impl OpponentPolicy for SilentOpponent {
    fn choose_action(&self, _: &Board, _: &[Action], _: &mut GameRng) -> Option<Action> {
        None
    }
}

#[test]
fn test_missing_reply_is_an_error() {
    let mut env = NumericalEnv::with_opponent(EnvConfig::default(), SilentOpponent);
    let err = env.step(action(4, 5)).unwrap_err();
    assert!(matches!(err, Error::OpponentRefused { available: 32, .. }));
    assert!(!matches!(err, Error::EmptyActionSpace { .. }));
    assert_eq!(*env.board(), Board::new());
    assert!(!env.is_done());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_fixed_seed_replays_step() {
    let b = board("1.2......");
    let rewards = RewardConfig::default();

    let first = step(&b, action(4, 7), &mut GameRng::new(77), &UniformOpponent, &rewards).unwrap();
    for _ in 0..5 {
        let again = step(&b, action(4, 7), &mut GameRng::new(77), &UniformOpponent, &rewards).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_fixed_seed_replays_episodes() {
    let play = |seed| {
        let mut env = NumericalEnv::new(EnvConfig::default().with_seed(seed));
        let mut agent = RandomAgent::new(seed);
        (0..10)
            .map(|_| run_episode(&mut env, &mut agent).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(123), play(123));
}

#[test]
fn test_forked_envs_are_independent() {
    let mut parent = NumericalEnv::new(EnvConfig::default());
    let mut a = parent.fork();
    let mut b = parent.fork();

    a.step(action(4, 5)).unwrap();
    assert_eq!(*b.board(), Board::new());

    b.step(action(0, 1)).unwrap();
    let center = Position::new(4).unwrap();
    assert_eq!(a.board().get(center), Some(Value::new(5).unwrap()));
    assert_ne!(b.board().get(center), Some(Value::new(5).unwrap()));
    assert_ne!(a.config().seed, b.config().seed);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_random_games_terminate_with_consistent_rewards() {
    let mut env = NumericalEnv::new(EnvConfig::default().with_seed(2024));
    let mut agent = RandomAgent::new(2024);
    let mut stats = EpisodeStats::new();

    for _ in 0..200 {
        let episode = run_episode(&mut env, &mut agent).unwrap();
        assert!(episode.outcome.is_terminal());

        let last = episode.transitions.last().unwrap();
        let expected = if episode.agent_won() {
            10
        } else if episode.agent_lost() {
            -10
        } else {
            0
        };
        assert_eq!(last.reward, expected);
        assert!(episode.transitions[..episode.len() - 1].iter().all(|t| t.reward == -1));

        stats.record(&episode);
    }

    assert_eq!(stats.episodes, 200);
    assert!(stats.wins > 0);
    assert!(stats.losses > 0);
}

#[test]
fn test_custom_rewards_flow_through() {
    let config = EnvConfig::default().with_rewards(RewardConfig::default().with_step(0));
    let mut env = NumericalEnv::new(config);
    let result = env.step(action(4, 5)).unwrap();
    assert_eq!(result.reward, 0);
}
