//! Observation and action space descriptors

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{RLError, Result};

/// Space descriptor supplied by the environment collaborator
///
/// Only `Discrete` spaces take part in learning. `Continuous` spaces are
/// accepted wherever a space is expected so that construction succeeds,
/// but learning calls against them fail with
/// [`RLError::UnsupportedSpaceKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Space {
    /// The finite index set `{0, ..., n-1}`
    Discrete {
        /// Number of elements
        n: usize,
    },
    /// A box with per-dimension bounds
    Continuous {
        /// Lower bounds for each dimension
        low: Vec<f64>,
        /// Upper bounds for each dimension
        high: Vec<f64>,
    },
}

impl Space {
    /// Create a discrete space of `n` elements
    #[must_use]
    pub fn discrete(n: usize) -> Self {
        Self::Discrete { n }
    }

    /// Create a continuous (box) space
    pub fn continuous(low: Vec<f64>, high: Vec<f64>) -> Result<Self> {
        if low.len() != high.len() {
            return Err(RLError::DimensionMismatch {
                expected: low.len(),
                actual: high.len(),
            });
        }
        Ok(Self::Continuous { low, high })
    }

    /// Number of elements for a discrete space
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Discrete { n } => Some(*n),
            Self::Continuous { .. } => None,
        }
    }

    /// Whether this is a discrete space
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete { .. })
    }

    /// Check if an index lies inside a discrete space
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.size().is_some_and(|n| index < n)
    }

    /// Sample an index uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        match self {
            Self::Discrete { n } if *n > 0 => Ok(rng.gen_range(0..*n)),
            Self::Discrete { .. } => Err(RLError::InvalidConfig(
                "cannot sample from an empty discrete space".to_string(),
            )),
            Self::Continuous { .. } => Err(RLError::UnsupportedSpaceKind {
                operation: "sample",
            }),
        }
    }
}
