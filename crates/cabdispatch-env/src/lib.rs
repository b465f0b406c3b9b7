mod config;
mod domain;
mod driver;
mod error;
mod ids;
mod rollout;
mod spaces;
mod state;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, DayRollover, EnvConfig, TravelTime};
pub use domain::Environment;
pub use driver::{CabDriver, Step};
pub use error::EnvError;
pub use ids::ActionId;
pub use rollout::{ReturnType, RolloutMetrics, RolloutParams, rollout, rollout_with_hook};
pub use spaces::{ActionSpace, StateSpace};
pub use state::{Action, State};
