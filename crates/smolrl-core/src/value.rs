//! Action-value functions Q(s, a)

use std::fmt;

use ndarray::{Array2, ArrayView1};

use crate::{error::Axis, RLError, Result, Space};

/// Representation behind an [`ActionValueFunction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    /// Dense table indexed `[state][action]`
    Discrete,
    /// Unimplemented function-approximation placeholder
    Continuous,
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete => f.write_str("discrete"),
            Self::Continuous => f.write_str("continuous"),
        }
    }
}

/// Action value function Q(s, a) over integer state and action indices
pub trait ActionValueFunction: fmt::Debug + Send + Sync {
    /// Which representation this is
    fn space_kind(&self) -> SpaceKind;

    /// Current estimate for a state-action pair
    fn value_of(&self, state: usize, action: usize) -> Result<f64>;

    /// Maximum estimate over all actions in a state
    fn max_value(&self, state: usize) -> Result<f64>;

    /// Estimates for every action in a state, in ascending action order
    fn values_for_state(&self, state: usize) -> Result<ArrayView1<'_, f64>>;

    /// Replace the estimate for a state-action pair
    fn write(&mut self, state: usize, action: usize, value: f64) -> Result<()>;

    /// Set every estimate back to its initial value
    fn reset(&mut self);

    /// Raw dense table, shaped `[state_count, action_count]`
    fn table(&self) -> Result<&Array2<f64>>;
}

/// Dense, zero-initialized Q-table for discrete state and action spaces
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteQFunction {
    q_table: Array2<f64>,
}

impl DiscreteQFunction {
    /// Create an all-zero table for `state_count` states and `action_count` actions
    #[must_use]
    pub fn new(state_count: usize, action_count: usize) -> Self {
        Self {
            q_table: Array2::zeros((state_count, action_count)),
        }
    }

    /// Number of states (rows)
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.q_table.nrows()
    }

    /// Number of actions (columns)
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.q_table.ncols()
    }

    fn check_state(&self, state: usize) -> Result<()> {
        if state < self.state_count() {
            Ok(())
        } else {
            Err(RLError::OutOfRange {
                axis: Axis::State,
                index: state,
                size: self.state_count(),
            })
        }
    }

    fn check_pair(&self, state: usize, action: usize) -> Result<()> {
        self.check_state(state)?;
        if action < self.action_count() {
            Ok(())
        } else {
            Err(RLError::OutOfRange {
                axis: Axis::Action,
                index: action,
                size: self.action_count(),
            })
        }
    }
}

impl ActionValueFunction for DiscreteQFunction {
    fn space_kind(&self) -> SpaceKind {
        SpaceKind::Discrete
    }

    fn value_of(&self, state: usize, action: usize) -> Result<f64> {
        self.check_pair(state, action)?;
        Ok(self.q_table[[state, action]])
    }

    fn max_value(&self, state: usize) -> Result<f64> {
        // NaN is sticky so a poisoned row surfaces instead of being skipped.
        let row = self.values_for_state(state)?;
        Ok(row.iter().copied().fold(f64::NEG_INFINITY, |best, v| {
            if best.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                best.max(v)
            }
        }))
    }

    fn values_for_state(&self, state: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_state(state)?;
        Ok(self.q_table.row(state))
    }

    fn write(&mut self, state: usize, action: usize, value: f64) -> Result<()> {
        self.check_pair(state, action)?;
        self.q_table[[state, action]] = value;
        Ok(())
    }

    fn reset(&mut self) {
        self.q_table.fill(0.0);
    }

    fn table(&self) -> Result<&Array2<f64>> {
        Ok(&self.q_table)
    }
}

/// Placeholder for continuous observation spaces
///
/// Holds the declared spaces so callers can inspect what was requested.
/// Every learning call fails with [`RLError::UnsupportedSpaceKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousQFunction {
    obs_space: Space,
    action_space: Space,
}

impl ContinuousQFunction {
    /// Create the placeholder for the given spaces
    #[must_use]
    pub fn new(obs_space: Space, action_space: Space) -> Self {
        Self {
            obs_space,
            action_space,
        }
    }

    /// Declared observation space
    #[must_use]
    pub fn obs_space(&self) -> &Space {
        &self.obs_space
    }

    /// Declared action space
    #[must_use]
    pub fn action_space(&self) -> &Space {
        &self.action_space
    }
}

impl ActionValueFunction for ContinuousQFunction {
    fn space_kind(&self) -> SpaceKind {
        SpaceKind::Continuous
    }

    fn value_of(&self, _state: usize, _action: usize) -> Result<f64> {
        Err(RLError::UnsupportedSpaceKind {
            operation: "value_of",
        })
    }

    fn max_value(&self, _state: usize) -> Result<f64> {
        Err(RLError::UnsupportedSpaceKind {
            operation: "max_value",
        })
    }

    fn values_for_state(&self, _state: usize) -> Result<ArrayView1<'_, f64>> {
        Err(RLError::UnsupportedSpaceKind {
            operation: "values_for_state",
        })
    }

    fn write(&mut self, _state: usize, _action: usize, _value: f64) -> Result<()> {
        Err(RLError::UnsupportedSpaceKind { operation: "write" })
    }

    fn reset(&mut self) {}

    fn table(&self) -> Result<&Array2<f64>> {
        Err(RLError::UnsupportedSpaceKind { operation: "table" })
    }
}

/// Pick the value-function representation for a pair of spaces
///
/// The dense table is used only when both spaces are discrete. Anything
/// else gets the continuous placeholder; this never fails, so the first
/// learning call is where an unsupported combination is reported.
#[must_use]
pub fn value_function_for(obs_space: &Space, action_space: &Space) -> Box<dyn ActionValueFunction> {
    match (obs_space, action_space) {
        (Space::Discrete { n: states }, Space::Discrete { n: actions }) => {
            Box::new(DiscreteQFunction::new(*states, *actions))
        }
        _ => {
            tracing::warn!(
                ?obs_space,
                ?action_space,
                "continuous value function selected; learning calls will fail"
            );
            Box::new(ContinuousQFunction::new(
                obs_space.clone(),
                action_space.clone(),
            ))
        }
    }
}
