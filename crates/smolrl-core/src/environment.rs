//! Environment interface consumed by training drivers
//!
//! No environment ships with this crate. Drivers implement [`Environment`]
//! for their simulator and feed the resulting [`Step`]s to an agent.

use crate::{Space, Transition};

/// Result of a single environment step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Observation (state index) after the action
    pub observation: usize,
    /// Reward signal
    pub reward: f64,
    /// Whether the episode is done
    pub done: bool,
    /// Whether the episode was truncated (e.g., time limit)
    pub truncated: bool,
}

impl Step {
    /// Whether the episode ended, either naturally or by truncation
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.done || self.truncated
    }

    /// Pair this step with the state and action that produced it
    #[must_use]
    pub fn transition(&self, state: usize, action: usize) -> Transition {
        Transition::new(state, action, self.reward, self.observation)
    }
}

/// Core environment trait
pub trait Environment {
    /// Get the observation space
    fn observation_space(&self) -> Space;

    /// Get the action space
    fn action_space(&self) -> Space;

    /// Reset the environment and return the initial observation
    fn reset(&mut self) -> crate::Result<usize>;

    /// Take a step in the environment
    fn step(&mut self, action: usize) -> crate::Result<Step>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_flags() {
        let step = Step {
            observation: 1,
            reward: 0.0,
            done: false,
            truncated: true,
        };
        assert!(step.is_terminal());
        assert!(!Step { truncated: false, ..step }.is_terminal());
    }

    #[test]
    fn test_step_to_transition() {
        let step = Step {
            observation: 3,
            reward: 1.5,
            done: true,
            truncated: false,
        };
        assert_eq!(step.transition(2, 1), Transition::new(2, 1, 1.5, 3));
    }
}
