//! Core reinforcement learning traits and types for smolrl
//!
//! This crate provides the vocabulary shared by tabular agents and the
//! environments that drive them: space descriptors, the action-value
//! function contract, the per-step transition tuple and the error taxonomy.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod environment;
pub mod error;
pub mod space;
pub mod transition;
pub mod value;

// Re-export core traits and types
pub use agent::Agent;
pub use environment::{Environment, Step};
pub use error::{Axis, RLError, Result};
pub use space::Space;
pub use transition::Transition;
pub use value::{
    value_function_for, ActionValueFunction, ContinuousQFunction, DiscreteQFunction, SpaceKind,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ActionValueFunction, Agent, Environment, RLError, Result, Space, Step, Transition,
    };
}
