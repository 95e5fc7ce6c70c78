//! One-step temporal-difference learner

use ndarray::{Array2, ArrayView1};
use smolrl_core::{value_function_for, ActionValueFunction, Result, Space};

/// Owns the action-value function and applies TD(0) updates to it
///
/// The update is split into [`compute_update`](Self::compute_update) and
/// [`apply_update`](Self::apply_update) so that the target is always built
/// from the pre-update value of `(state, action)`, including when
/// `next_state == state`.
#[derive(Debug)]
pub struct Learner {
    learning_rate: f64,
    gamma: f64,
    q_function: Box<dyn ActionValueFunction>,
}

impl Learner {
    /// Create a learner with a zero-initialized value function for the given spaces
    #[must_use]
    pub fn new(obs_space: &Space, action_space: &Space, learning_rate: f64, gamma: f64) -> Self {
        Self {
            learning_rate,
            gamma,
            q_function: value_function_for(obs_space, action_space),
        }
    }

    /// Learning rate α
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Discount factor γ
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// The owned value function
    #[must_use]
    pub fn q_function(&self) -> &dyn ActionValueFunction {
        self.q_function.as_ref()
    }

    /// Updated estimate for `(state, action)` without writing it
    ///
    /// Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    pub fn compute_update(
        &self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
    ) -> Result<f64> {
        let current = self.q_function.value_of(state, action)?;
        let target = reward + self.gamma * self.q_function.max_value(next_state)?;
        Ok(current + self.learning_rate * (target - current))
    }

    /// Store a value produced by [`compute_update`](Self::compute_update)
    pub fn apply_update(&mut self, updated: f64, state: usize, action: usize) -> Result<()> {
        self.q_function.write(state, action, updated)
    }

    /// Current estimate for a state-action pair
    pub fn value_of(&self, state: usize, action: usize) -> Result<f64> {
        self.q_function.value_of(state, action)
    }

    /// Maximum estimate over actions in a state
    pub fn max_value(&self, state: usize) -> Result<f64> {
        self.q_function.max_value(state)
    }

    /// Estimates for every action in a state, in ascending action order
    pub fn values_for_state(&self, state: usize) -> Result<ArrayView1<'_, f64>> {
        self.q_function.values_for_state(state)
    }

    /// Raw Q-table
    pub fn table(&self) -> Result<&Array2<f64>> {
        self.q_function.table()
    }

    /// Zero the value function in place
    pub fn reset(&mut self) {
        self.q_function.reset();
    }
}
