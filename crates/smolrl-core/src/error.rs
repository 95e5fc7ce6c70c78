//! Error types for the RL core library

use std::fmt;

use thiserror::Error;

/// Which index of a `(state, action)` pair was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Observation/state index
    State,
    /// Action index
    Action,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => f.write_str("state"),
            Self::Action => f.write_str("action"),
        }
    }
}

/// Core error type for RL operations
#[derive(Error, Debug)]
pub enum RLError {
    /// The continuous value-function path has no learning implementation
    #[error("Unsupported space kind: `{operation}` is not implemented for continuous spaces")]
    UnsupportedSpaceKind {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// State or action index outside the declared discrete space
    #[error("{axis} index {index} out of range for discrete space of size {size}")]
    OutOfRange {
        /// Which index was rejected
        axis: Axis,
        /// Offending index
        index: usize,
        /// Declared space size
        size: usize,
    },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Hyperparameter or space validation failure
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No action in the row compares equal to the row maximum (all NaN)
    #[error("No greedy action for state {state}: value row has no comparable maximum")]
    NoGreedyAction {
        /// State whose row was inspected
        state: usize,
    },

    /// Environment-related errors
    #[error("Environment error: {0}")]
    Environment(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for RL operations
pub type Result<T> = std::result::Result<T, RLError>;
