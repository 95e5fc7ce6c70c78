//! Epsilon-greedy action selection

use rand::{rngs::StdRng, seq::SliceRandom, Rng};
use smolrl_core::{RLError, Result, Space};

use crate::Learner;

/// Epsilon-greedy explorer
///
/// With probability `epsilon` a uniformly random action is drawn from the
/// action space; otherwise one of the actions with the highest estimate is
/// chosen, ties broken uniformly at random. All randomness comes from the
/// owned RNG, so a seeded RNG gives reproducible choices.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<R = StdRng> {
    epsilon: f64,
    action_space: Space,
    rng: R,
}

impl<R: Rng> EpsilonGreedy<R> {
    /// Create a new explorer
    pub fn new(epsilon: f64, action_space: Space, rng: R) -> Self {
        Self {
            epsilon,
            action_space,
            rng,
        }
    }

    /// Exploration probability
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Set the exploration probability
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon.clamp(0.0, 1.0);
    }

    /// The action space exploration samples from
    #[must_use]
    pub fn action_space(&self) -> &Space {
        &self.action_space
    }

    /// Choose an action for `state` using the learner's current estimates
    #[allow(clippy::float_cmp)]
    pub fn choose_action(&mut self, learner: &Learner, state: usize) -> Result<usize> {
        let draw: f64 = self.rng.gen();
        if draw < self.epsilon {
            let action = self.action_space.sample(&mut self.rng)?;
            tracing::trace!(state, action, "explore");
            return Ok(action);
        }

        let best = learner.max_value(state)?;
        // Exact comparison: every action sharing the maximum is a candidate.
        let greedy: Vec<usize> = learner
            .values_for_state(state)?
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == best)
            .map(|(action, _)| action)
            .collect();

        let action = greedy
            .choose(&mut self.rng)
            .copied()
            .ok_or(RLError::NoGreedyAction { state })?;
        tracing::trace!(state, action, candidates = greedy.len(), "exploit");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn setup(epsilon: f64) -> (Learner, EpsilonGreedy) {
        let learner = Learner::new(&Space::discrete(2), &Space::discrete(4), 0.5, 0.9);
        let explorer = EpsilonGreedy::new(epsilon, Space::discrete(4), StdRng::seed_from_u64(11));
        (learner, explorer)
    }

    #[test]
    fn test_greedy_picks_argmax() {
        let (mut learner, mut explorer) = setup(0.0);
        learner.apply_update(0.3, 0, 2).unwrap();
        learner.apply_update(0.1, 0, 0).unwrap();
        for _ in 0..100 {
            assert_eq!(explorer.choose_action(&learner, 0).unwrap(), 2);
        }
    }

    #[test]
    fn test_greedy_with_negative_values() {
        let (mut learner, mut explorer) = setup(0.0);
        for (action, value) in [(0, -3.0), (1, -0.5), (2, -1.0), (3, -2.0)] {
            learner.apply_update(value, 1, action).unwrap();
        }
        assert_eq!(explorer.choose_action(&learner, 1).unwrap(), 1);
    }

    #[test]
    fn test_ties_only_return_maximizers() {
        let (mut learner, mut explorer) = setup(0.0);
        learner.apply_update(1.0, 0, 1).unwrap();
        learner.apply_update(1.0, 0, 3).unwrap();
        for _ in 0..200 {
            let action = explorer.choose_action(&learner, 0).unwrap();
            assert!(action == 1 || action == 3);
        }
    }

    #[test]
    fn test_all_nan_row_has_no_greedy_action() {
        let (mut learner, mut explorer) = setup(0.0);
        for action in 0..4 {
            learner.apply_update(f64::NAN, 0, action).unwrap();
        }
        assert!(matches!(
            explorer.choose_action(&learner, 0),
            Err(RLError::NoGreedyAction { state: 0 })
        ));
    }

    #[test]
    fn test_exploit_checks_state_range() {
        let (learner, mut explorer) = setup(0.0);
        assert!(matches!(
            explorer.choose_action(&learner, 5),
            Err(RLError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_explore_ignores_table() {
        let (mut learner, mut explorer) = setup(1.0);
        learner.apply_update(100.0, 0, 0).unwrap();
        let picked_other = (0..200).any(|_| explorer.choose_action(&learner, 0).unwrap() != 0);
        assert!(picked_other);
    }

    #[test]
    fn test_explore_continuous_action_space_unsupported() {
        let learner = Learner::new(&Space::discrete(2), &Space::discrete(2), 0.5, 0.9);
        let actions = Space::continuous(vec![-1.0], vec![1.0]).unwrap();
        let mut explorer = EpsilonGreedy::new(1.0, actions, StdRng::seed_from_u64(0));
        assert!(matches!(
            explorer.choose_action(&learner, 0),
            Err(RLError::UnsupportedSpaceKind { .. })
        ));
    }

    #[test]
    fn test_set_epsilon_clamps() {
        let (_, mut explorer) = setup(0.5);
        explorer.set_epsilon(1.7);
        assert_eq!(explorer.epsilon(), 1.0);
        explorer.set_epsilon(-0.2);
        assert_eq!(explorer.epsilon(), 0.0);
    }
}
