//! Q-learning agent configuration

use serde::{Deserialize, Serialize};
use smolrl_core::{RLError, Result, Space};

/// Hyperparameters and spaces for a [`QLearningAgent`](crate::QLearningAgent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QLearningConfig {
    /// Observation (state) space
    pub obs_space: Space,
    /// Action space
    pub action_space: Space,
    /// Learning rate α, in (0, 1]
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    /// Discount factor γ, in [0, 1]
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Exploration probability ε, in [0, 1]
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Seed for the explorer's RNG; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_gamma() -> f64 {
    0.99
}

fn default_epsilon() -> f64 {
    0.1
}

impl QLearningConfig {
    /// Create a configuration with explicit hyperparameters and no seed
    #[must_use]
    pub fn new(
        obs_space: Space,
        action_space: Space,
        learning_rate: f64,
        gamma: f64,
        epsilon: f64,
    ) -> Self {
        Self {
            obs_space,
            action_space,
            learning_rate,
            gamma,
            epsilon,
            seed: None,
        }
    }

    /// Default hyperparameters for two discrete spaces
    #[must_use]
    pub fn discrete(states: usize, actions: usize) -> Self {
        Self::new(
            Space::discrete(states),
            Space::discrete(actions),
            default_learning_rate(),
            default_gamma(),
            default_epsilon(),
        )
    }

    /// Set the RNG seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check hyperparameter ranges and discrete space sizes
    ///
    /// Continuous spaces are accepted here; they are rejected by the first
    /// learning call instead.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(RLError::InvalidConfig(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(RLError::InvalidConfig(format!(
                "gamma must be in [0, 1], got {}",
                self.gamma
            )));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(RLError::InvalidConfig(format!(
                "epsilon must be in [0, 1], got {}",
                self.epsilon
            )));
        }
        for (name, space) in [("obs_space", &self.obs_space), ("action_space", &self.action_space)] {
            if space.size() == Some(0) {
                return Err(RLError::InvalidConfig(format!(
                    "{name} must have at least one element"
                )));
            }
        }
        Ok(())
    }
}
