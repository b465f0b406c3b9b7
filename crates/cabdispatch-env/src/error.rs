use thiserror::Error;

use crate::ConfigError;

#[derive(Debug, Error)]
/// Error type for driver construction and stepping.
pub enum EnvError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("action ({pickup}, {dropoff}) references a city outside [0, {cities})")]
    CityOutOfRange {
        pickup: usize,
        dropoff: usize,
        cities: usize,
    },

    #[error(
        "state ({city}, {hour}, {day}) lies outside the {cities}x{hours}x{days} state space"
    )]
    StateOutOfBounds {
        city: usize,
        hour: usize,
        day: usize,
        cities: usize,
        hours: usize,
        days: usize,
    },

    #[error("action id {action_id} is outside an action space of {len} actions")]
    UnknownAction { action_id: usize, len: usize },

    #[error("rollout gamma must be finite and >= 0, got {gamma}")]
    InvalidGamma { gamma: f64 },
}
