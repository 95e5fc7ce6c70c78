//! Tabular Q-learning agent for smolrl
//!
//! The agent is split the same way the algorithm is:
//! - [`Learner`] owns the Q-table and applies the TD(0) update
//! - [`EpsilonGreedy`] chooses actions from the learner's estimates
//! - [`QLearningAgent`] wires the two together for a training driver

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod explorer;
pub mod learner;
pub mod q_learning;

pub use config::QLearningConfig;
pub use explorer::EpsilonGreedy;
pub use learner::Learner;
pub use q_learning::QLearningAgent;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{EpsilonGreedy, Learner, QLearningAgent, QLearningConfig};
    pub use smolrl_core::prelude::*;
}
