//! Per-step transitions consumed by learning agents

use serde::{Deserialize, Serialize};

/// A single `(s, a, r, s')` transition observed by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// State the action was taken in
    pub state: usize,
    /// Action taken
    pub action: usize,
    /// Reward received
    pub reward: f64,
    /// State reached after the action
    pub next_state: usize,
}

impl Transition {
    /// Create a new transition
    #[must_use]
    pub fn new(state: usize, action: usize, reward: f64, next_state: usize) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
        }
    }
}
