use crate::{ConfigError, DayRollover, EnvConfig, TravelTime};

#[test]
fn default_yaml_matches_default_config() {
    let parsed = EnvConfig::from_default_yaml().expect("default yaml should parse");
    assert_eq!(parsed, EnvConfig::default());
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let config = EnvConfig::from_yaml_str("cities: 3\nday_rollover: elapsed\n")
        .expect("partial yaml should parse");

    assert_eq!(config.cities, 3);
    assert_eq!(config.hours, 24);
    assert_eq!(config.day_rollover, DayRollover::Elapsed);
    assert_eq!(config.travel_time, TravelTime { min: 1, max: 2 });
}

#[test]
fn peak_hours_follow_half_open_windows() {
    let config = EnvConfig::default();
    let peak: Vec<usize> = (0..24).filter(|hour| config.is_peak(*hour)).collect();
    assert_eq!(peak, vec![7, 8, 9, 17, 18, 19]);
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        EnvConfig {
            cities: 1,
            ..EnvConfig::default()
        },
        EnvConfig {
            hours: 0,
            ..EnvConfig::default()
        },
        EnvConfig {
            days: 0,
            ..EnvConfig::default()
        },
        EnvConfig {
            base_fare: f64::NAN,
            ..EnvConfig::default()
        },
        EnvConfig {
            surge_factor: -1.0,
            ..EnvConfig::default()
        },
        EnvConfig {
            travel_time: TravelTime { min: 0, max: 2 },
            ..EnvConfig::default()
        },
        EnvConfig {
            travel_time: TravelTime { min: 3, max: 2 },
            ..EnvConfig::default()
        },
        EnvConfig {
            peak_windows: vec![[10, 7]],
            ..EnvConfig::default()
        },
        EnvConfig {
            peak_windows: vec![[20, 25]],
            ..EnvConfig::default()
        },
    ];

    for config in cases {
        let err = config.validate().expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }
}

#[test]
fn unknown_rollover_mode_is_a_yaml_error() {
    let err = EnvConfig::from_yaml_str("day_rollover: sometimes\n").expect_err("should fail");
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = EnvConfig::from_yaml_path("does/not/exist.yaml").expect_err("should fail");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn travel_time_longer_than_a_day_is_rejected() {
    let config = EnvConfig {
        travel_time: TravelTime {
            min: usize::MAX,
            max: usize::MAX,
        },
        ..EnvConfig::default()
    };
    let err = config.validate().expect_err("travel time overflows the clock");
    assert!(matches!(err, ConfigError::Invalid(_)));

    let config = EnvConfig {
        travel_time: TravelTime { min: 1, max: 25 },
        ..EnvConfig::default()
    };
    assert!(config.validate().is_err());

    let config = EnvConfig {
        travel_time: TravelTime { min: 24, max: 24 },
        ..EnvConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn oversized_spaces_are_rejected() {
    let huge_hours = EnvConfig {
        hours: usize::MAX / 2,
        peak_windows: Vec::new(),
        ..EnvConfig::default()
    };
    let err = huge_hours.validate().expect_err("state space index overflows");
    assert!(matches!(err, ConfigError::Invalid(_)));

    let huge_cities = EnvConfig {
        cities: usize::MAX / 2,
        hours: 1,
        days: 1,
        peak_windows: Vec::new(),
        travel_time: TravelTime { min: 1, max: 1 },
        ..EnvConfig::default()
    };
    let err = huge_cities.validate().expect_err("action space overflows");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn error_messages_name_the_driver_config() {
    let err = EnvConfig::from_yaml_path("does/not/exist.yaml").expect_err("should fail");
    assert!(err.to_string().starts_with("failed to read driver config file"));

    let err = EnvConfig::from_yaml_str("cities: [").expect_err("should fail");
    assert!(err.to_string().starts_with("failed to parse driver config YAML"));
}
