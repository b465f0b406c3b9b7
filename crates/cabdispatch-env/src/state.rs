use serde::{Deserialize, Serialize};

/// A driver's situation: current city, hour of day and day of week.
///
/// Serialized as a flat `[city, hour, day]` array so it matches the
/// prediction wire format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 3]", into = "[usize; 3]")]
pub struct State {
    pub city: usize,
    pub hour: usize,
    pub day: usize,
}

impl State {
    pub fn new(city: usize, hour: usize, day: usize) -> Self {
        Self { city, hour, day }
    }
}

impl From<[usize; 3]> for State {
    fn from([city, hour, day]: [usize; 3]) -> Self {
        Self::new(city, hour, day)
    }
}

impl From<(usize, usize, usize)> for State {
    fn from((city, hour, day): (usize, usize, usize)) -> Self {
        Self::new(city, hour, day)
    }
}

impl From<State> for [usize; 3] {
    fn from(state: State) -> Self {
        [state.city, state.hour, state.day]
    }
}

/// Ordered `(pickup, dropoff)` city pair.
///
/// A pair with equal cities earns nothing; `Action::NOOP` is the one such
/// pair that belongs to the action space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Action {
    pub pickup: usize,
    pub dropoff: usize,
}

impl Action {
    /// Stay idle for one step.
    pub const NOOP: Action = Action {
        pickup: 0,
        dropoff: 0,
    };

    pub fn new(pickup: usize, dropoff: usize) -> Self {
        Self { pickup, dropoff }
    }

    /// Return whether this pair carries no passenger.
    pub fn is_noop(&self) -> bool {
        self.pickup == self.dropoff
    }
}

impl From<[usize; 2]> for Action {
    fn from([pickup, dropoff]: [usize; 2]) -> Self {
        Self::new(pickup, dropoff)
    }
}

impl From<(usize, usize)> for Action {
    fn from((pickup, dropoff): (usize, usize)) -> Self {
        Self::new(pickup, dropoff)
    }
}

impl From<Action> for [usize; 2] {
    fn from(action: Action) -> Self {
        [action.pickup, action.dropoff]
    }
}
