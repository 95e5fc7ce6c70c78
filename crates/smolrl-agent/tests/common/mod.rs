//! Shared fixtures for integration tests

#![allow(dead_code)]

use smolrl_agent::QLearningAgent;
use smolrl_core::{Environment, Result, Space, Step};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const LEFT: usize = 0;
pub const RIGHT: usize = 1;

/// Deterministic corridor `0 - 1 - ... - (len-1)`
///
/// Every episode starts in state 0. `LEFT` moves one cell left (bouncing
/// off the wall), `RIGHT` moves one cell right. Entering the last cell
/// pays 1 and ends the episode; every other step pays 0.
pub struct ChainWalk {
    len: usize,
    position: usize,
    steps: usize,
    max_steps: usize,
}

impl ChainWalk {
    pub fn new(len: usize, max_steps: usize) -> Self {
        Self {
            len,
            position: 0,
            steps: 0,
            max_steps,
        }
    }
}

impl Environment for ChainWalk {
    fn observation_space(&self) -> Space {
        Space::discrete(self.len)
    }

    fn action_space(&self) -> Space {
        Space::discrete(2)
    }

    fn reset(&mut self) -> Result<usize> {
        self.position = 0;
        self.steps = 0;
        Ok(self.position)
    }

    fn step(&mut self, action: usize) -> Result<Step> {
        self.position = match action {
            LEFT => self.position.saturating_sub(1),
            RIGHT => (self.position + 1).min(self.len - 1),
            other => {
                return Err(smolrl_core::RLError::Environment(format!(
                    "unknown action {other}"
                )))
            }
        };
        self.steps += 1;
        let done = self.position == self.len - 1;
        Ok(Step {
            observation: self.position,
            reward: if done { 1.0 } else { 0.0 },
            done,
            truncated: !done && self.steps >= self.max_steps,
        })
    }
}

/// Play one episode, updating after every step; returns the step count
pub fn run_episode<E: Environment>(agent: &mut QLearningAgent, env: &mut E) -> Result<usize> {
    let mut state = env.reset()?;
    let mut steps = 0;
    loop {
        let action = agent.choose_action(state)?;
        let step = env.step(action)?;
        agent.observe(&step.transition(state, action))?;
        steps += 1;
        if step.is_terminal() {
            return Ok(steps);
        }
        state = step.observation;
    }
}
