use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    ActionId, ActionSpace, ConfigError, DayRollover, EnvConfig, EnvError, StateSpace, TravelTime,
    state::{Action, State},
};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Result of one transition.
pub struct Step {
    pub state: State,
    pub reward: f64,
    /// Hours spent driving to the dropoff city.
    pub travel_time: usize,
    /// `travel_time * cost_per_hour`; not deducted from `reward`.
    pub cost: f64,
}

#[derive(Debug, Clone)]
/// One simulated cab driver with a private, seedable random source.
pub struct CabDriver<R = ChaCha8Rng> {
    driver_id: String,
    config: EnvConfig,
    action_space: ActionSpace,
    state_space: StateSpace,
    state_init: State,
    current_state: State,
    rng: R,
}

impl CabDriver<ChaCha8Rng> {
    /// Create a driver with deterministic RNG seed.
    pub fn new(
        driver_id: impl Into<String>,
        config: EnvConfig,
        seed: u64,
    ) -> Result<Self, EnvError> {
        Self::with_rng(driver_id, config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> CabDriver<R> {
    /// Create a driver whose initial state is drawn uniformly from the state space.
    pub fn with_rng(
        driver_id: impl Into<String>,
        config: EnvConfig,
        mut rng: R,
    ) -> Result<Self, EnvError> {
        config.validate()?;
        let state_space = StateSpace::from_config(&config);
        let state_init = state_space
            .sample(&mut rng)
            .ok_or_else(|| ConfigError::Invalid("state space is empty".to_string()))?;

        Ok(Self::assemble(
            driver_id.into(),
            config,
            state_space,
            state_init,
            rng,
        ))
    }

    /// Create a driver pinned to a known initial state.
    pub fn with_initial_state(
        driver_id: impl Into<String>,
        config: EnvConfig,
        state_init: State,
        rng: R,
    ) -> Result<Self, EnvError> {
        config.validate()?;
        let state_space = StateSpace::from_config(&config);
        if !state_space.contains(state_init) {
            return Err(EnvError::StateOutOfBounds {
                city: state_init.city,
                hour: state_init.hour,
                day: state_init.day,
                cities: config.cities,
                hours: config.hours,
                days: config.days,
            });
        }

        Ok(Self::assemble(
            driver_id.into(),
            config,
            state_space,
            state_init,
            rng,
        ))
    }

    fn assemble(
        driver_id: String,
        config: EnvConfig,
        state_space: StateSpace,
        state_init: State,
        rng: R,
    ) -> Self {
        debug!("driver {driver_id} starts at {state_init:?}");
        Self {
            driver_id,
            action_space: ActionSpace::new(config.cities),
            config,
            state_space,
            state_init,
            current_state: state_init,
            rng,
        }
    }

    pub fn driver_id(&self) -> &str {
        &self.driver_id
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    pub fn state_space(&self) -> &StateSpace {
        &self.state_space
    }

    pub fn state_init(&self) -> State {
        self.state_init
    }

    pub fn current_state(&self) -> State {
        self.current_state
    }

    /// Return to the state captured at construction.
    pub fn reset(&mut self) -> State {
        self.current_state = self.state_init;
        debug!("driver {} reset to {:?}", self.driver_id, self.state_init);
        self.current_state
    }

    /// Fare for a ride that starts at `hour`, surged inside peak windows.
    pub fn dynamic_reward(&self, hour: usize) -> f64 {
        if self.config.is_peak(hour) {
            self.config.base_fare * self.config.surge_factor
        } else {
            self.config.base_fare
        }
    }

    /// Drive from `action.pickup` to `action.dropoff` and advance the clock.
    ///
    /// The current city never constrains the pickup; the driver always ends
    /// up at the dropoff city, even for idle pairs.
    pub fn step(&mut self, action: Action) -> Result<Step, EnvError> {
        let cities = self.config.cities;
        if action.pickup >= cities || action.dropoff >= cities {
            return Err(EnvError::CityOutOfRange {
                pickup: action.pickup,
                dropoff: action.dropoff,
                cities,
            });
        }

        let State { hour, day, .. } = self.current_state;
        let reward = if action.is_noop() {
            0.0
        } else {
            self.dynamic_reward(hour)
        };

        let TravelTime { min, max } = self.config.travel_time;
        let travel_time = self.rng.gen_range(min..=max);

        let hours = self.config.hours;
        let day_carry = match self.config.day_rollover {
            DayRollover::CurrentHour => (hour + 1) / hours,
            DayRollover::Elapsed => (hour + travel_time) / hours,
        };
        let next = State::new(
            action.dropoff,
            (hour + travel_time) % hours,
            (day + day_carry) % self.config.days,
        );

        trace!(
            "driver {} {:?} --{:?}/{}h--> {:?} reward={}",
            self.driver_id, self.current_state, action, travel_time, next, reward
        );
        self.current_state = next;

        Ok(Step {
            state: next,
            reward,
            travel_time,
            cost: travel_time as f64 * self.config.cost_per_hour,
        })
    }

    /// Step with an action looked up by its id in the action space.
    pub fn step_by_id(&mut self, action_id: ActionId) -> Result<Step, EnvError> {
        let action = self
            .action_space
            .get(action_id)
            .ok_or(EnvError::UnknownAction {
                action_id: action_id.index(),
                len: self.action_space.len(),
            })?;
        self.step(action)
    }
}
