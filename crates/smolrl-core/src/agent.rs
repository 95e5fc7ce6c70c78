//! Agent trait

use crate::Transition;

/// Core agent trait
///
/// Calls are strictly sequential: the `update` for step `t` must return
/// before `choose_action` for step `t + 1` reads the value estimates.
pub trait Agent {
    /// Select an action for the given state
    fn choose_action(&mut self, state: usize) -> crate::Result<usize>;

    /// Learn from one `(s, a, r, s')` step
    fn update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
    ) -> crate::Result<()>;

    /// Forget everything learned, keeping hyperparameters and RNG state
    fn reset(&mut self);

    /// Learn from a recorded transition
    fn observe(&mut self, transition: &Transition) -> crate::Result<()> {
        self.update(
            transition.state,
            transition.action,
            transition.reward,
            transition.next_state,
        )
    }
}
