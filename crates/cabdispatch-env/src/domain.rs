use rand::Rng;

use crate::{ActionId, CabDriver, EnvError, State, Step};

/// Interface an external agent loop drives: observe, pick an action id, step.
pub trait Environment {
    /// Return the environment to its initial state.
    fn reset(&mut self) -> State;

    /// Return the state the next step starts from.
    fn current_state(&self) -> State;

    /// Return the size of the action space.
    fn num_actions(&self) -> usize;

    /// Apply the action with the given id.
    fn step_action(&mut self, action_id: ActionId) -> Result<Step, EnvError>;
}

impl<R: Rng> Environment for CabDriver<R> {
    fn reset(&mut self) -> State {
        CabDriver::reset(self)
    }

    fn current_state(&self) -> State {
        CabDriver::current_state(self)
    }

    fn num_actions(&self) -> usize {
        self.action_space().len()
    }

    fn step_action(&mut self, action_id: ActionId) -> Result<Step, EnvError> {
        self.step_by_id(action_id)
    }
}
