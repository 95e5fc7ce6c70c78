//! Tabular Q-learning agent
//!
//! Composes a [`Learner`] (the value table and TD(0) rule) with an
//! [`EpsilonGreedy`] explorer. The agent holds no state of its own: all of
//! what it has learned lives in the learner's table.

use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use smolrl_core::{Agent, Result, Transition};

use crate::{EpsilonGreedy, Learner, QLearningConfig};

/// Q-learning agent (off-policy TD control)
#[derive(Debug)]
pub struct QLearningAgent<R = StdRng> {
    learner: Learner,
    explorer: EpsilonGreedy<R>,
}

impl QLearningAgent<StdRng> {
    /// Create an agent, seeding the explorer from `config.seed` or from entropy
    pub fn new(config: &QLearningConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> QLearningAgent<R> {
    /// Create an agent whose explorer draws from the supplied RNG
    ///
    /// `config.seed` is ignored. Fails only on invalid hyperparameters;
    /// continuous spaces are accepted and rejected by the first learning call.
    pub fn with_rng(config: &QLearningConfig, rng: R) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            obs_space = ?config.obs_space,
            action_space = ?config.action_space,
            learning_rate = config.learning_rate,
            gamma = config.gamma,
            epsilon = config.epsilon,
            "creating Q-learning agent"
        );

        let learner = Learner::new(
            &config.obs_space,
            &config.action_space,
            config.learning_rate,
            config.gamma,
        );
        let explorer = EpsilonGreedy::new(config.epsilon, config.action_space.clone(), rng);
        Ok(Self { learner, explorer })
    }

    /// Select an action for `state` with the epsilon-greedy policy
    pub fn choose_action(&mut self, state: usize) -> Result<usize> {
        self.explorer.choose_action(&self.learner, state)
    }

    /// Apply one Q-learning update for `(state, action, reward, next_state)`
    pub fn update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
    ) -> Result<()> {
        let updated = self
            .learner
            .compute_update(state, action, reward, next_state)?;
        self.learner.apply_update(updated, state, action)?;
        tracing::trace!(state, action, reward, next_state, updated, "q update");
        Ok(())
    }

    /// Apply one update from a recorded transition
    pub fn observe(&mut self, transition: &Transition) -> Result<()> {
        self.update(
            transition.state,
            transition.action,
            transition.reward,
            transition.next_state,
        )
    }

    /// Zero the Q-table; epsilon and the RNG stream are left untouched
    pub fn reset(&mut self) {
        tracing::debug!("resetting Q-table");
        self.learner.reset();
    }

    /// Borrow the Q-table, shaped `[state_count, action_count]`
    pub fn q_table(&self) -> Result<&Array2<f64>> {
        self.learner.table()
    }

    /// Copy of the Q-table for plotting or export
    pub fn q_table_snapshot(&self) -> Result<Array2<f64>> {
        self.learner.table().cloned()
    }

    /// The learner
    #[must_use]
    pub fn learner(&self) -> &Learner {
        &self.learner
    }

    /// The explorer
    #[must_use]
    pub fn explorer(&self) -> &EpsilonGreedy<R> {
        &self.explorer
    }

    /// Mutable access to the explorer, e.g. to adjust epsilon between runs
    pub fn explorer_mut(&mut self) -> &mut EpsilonGreedy<R> {
        &mut self.explorer
    }
}

impl<R: Rng> Agent for QLearningAgent<R> {
    fn choose_action(&mut self, state: usize) -> Result<usize> {
        QLearningAgent::choose_action(self, state)
    }

    fn update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
    ) -> Result<()> {
        QLearningAgent::update(self, state, action, reward, next_state)
    }

    fn reset(&mut self) {
        QLearningAgent::reset(self);
    }
}
