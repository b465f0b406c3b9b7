use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_DRIVER_CONFIG_YAML: &str = include_str!("../config/driver.default.yaml");

/// Decides when a step advances the day of week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRollover {
    /// Advance when `current_hour + 1` reaches the end of the day, independent
    /// of the sampled travel time. Reproduces previously recorded dynamics.
    #[default]
    CurrentHour,
    /// Advance when the sampled travel time carries the hour past midnight.
    Elapsed,
}

/// Inclusive bounds of the uniform travel-time draw, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTime {
    pub min: usize,
    pub max: usize,
}

impl Default for TravelTime {
    fn default() -> Self {
        TravelTime { min: 1, max: 2 }
    }
}

/// Immutable hyperparameters of the cab-dispatch environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub cities: usize,
    pub hours: usize,
    pub days: usize,
    /// Fuel and other running cost per hour of travel. Reported on each
    /// step, never deducted from the reward.
    pub cost_per_hour: f64,
    pub base_fare: f64,
    pub surge_factor: f64,
    /// Half-open `[start, end)` hour windows where the surge factor applies.
    pub peak_windows: Vec<[usize; 2]>,
    pub travel_time: TravelTime,
    pub day_rollover: DayRollover,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            cities: 5,
            hours: 24,
            days: 7,
            cost_per_hour: 5.0,
            base_fare: 9.0,
            surge_factor: 2.0,
            peak_windows: vec![[7, 10], [17, 20]],
            travel_time: TravelTime::default(),
            day_rollover: DayRollover::CurrentHour,
        }
    }
}

impl EnvConfig {
    /// Parse a driver config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: EnvConfig = serde_yaml::from_str(yaml).map_err(ConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a driver config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_DRIVER_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, ConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Check bounds and value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cities < 2 {
            return Err(ConfigError::Invalid(
                "cities must be at least 2".to_string(),
            ));
        }
        if self.hours == 0 {
            return Err(ConfigError::Invalid(
                "hours must be greater than 0".to_string(),
            ));
        }
        if self.days == 0 {
            return Err(ConfigError::Invalid(
                "days must be greater than 0".to_string(),
            ));
        }
        for (name, value) in [
            ("cost_per_hour", self.cost_per_hour),
            ("base_fare", self.base_fare),
            ("surge_factor", self.surge_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        let state_count = self
            .cities
            .checked_mul(self.hours)
            .and_then(|n| n.checked_mul(self.days));
        if state_count.is_none() {
            return Err(ConfigError::Invalid(
                "cities * hours * days overflows the state space index".to_string(),
            ));
        }
        let action_count = self
            .cities
            .checked_mul(self.cities - 1)
            .and_then(|n| n.checked_add(1));
        if action_count.is_none() {
            return Err(ConfigError::Invalid(
                "cities * (cities - 1) + 1 overflows the action space".to_string(),
            ));
        }
        if self.travel_time.min == 0 || self.travel_time.min > self.travel_time.max {
            return Err(ConfigError::Invalid(
                "travel_time must satisfy 1 <= min <= max".to_string(),
            ));
        }
        // A ride lasts at most one day, so the clock advances without overflow.
        if self.travel_time.max > self.hours
            || self.hours.checked_add(self.travel_time.max).is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "travel_time.max must not exceed hours ({})",
                self.hours
            )));
        }
        for [start, end] in &self.peak_windows {
            if start >= end || *end > self.hours {
                return Err(ConfigError::Invalid(format!(
                    "peak window [{start}, {end}) must satisfy start < end <= {}",
                    self.hours
                )));
            }
        }
        Ok(())
    }

    /// Return whether `hour` falls inside any peak window.
    pub fn is_peak(&self, hour: usize) -> bool {
        self.peak_windows
            .iter()
            .any(|[start, end]| (*start..*end).contains(&hour))
    }
}

/// Error type for loading and validating a driver `EnvConfig`.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read driver config file: {err}"),
            ConfigError::Yaml(err) => write!(f, "failed to parse driver config YAML: {err}"),
            ConfigError::Invalid(err) => write!(f, "invalid driver config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}
