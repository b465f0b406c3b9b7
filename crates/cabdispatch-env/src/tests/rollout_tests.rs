use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    ActionId, CabDriver, EnvConfig, EnvError, Environment, ReturnType, RolloutParams, State,
    TravelTime, rollout, rollout_with_hook,
};

fn off_peak_driver() -> CabDriver {
    // One-hour rides from 0:00 stay off-peak for the first seven steps.
    let config = EnvConfig {
        travel_time: TravelTime { min: 1, max: 1 },
        ..EnvConfig::default()
    };
    CabDriver::with_initial_state("roll", config, State::new(0, 0, 0), ChaCha8Rng::seed_from_u64(3))
        .expect("driver")
}

#[test]
fn return_modes_are_applied_correctly() {
    let ride = |_state: &State, _num_actions: usize| ActionId::from(0);

    let mut driver = off_peak_driver();
    let discounted = rollout(
        &mut driver,
        ride,
        RolloutParams {
            return_type: ReturnType::Discounted,
            gamma: 0.5,
            steps: 3,
        },
    )
    .expect("discounted rollout should succeed");
    assert!((discounted.total_return - 9.0 * 1.75).abs() < f64::EPSILON);
    assert!((discounted.total_reward - 27.0).abs() < f64::EPSILON);

    driver.reset();
    let undiscounted = rollout(
        &mut driver,
        ride,
        RolloutParams {
            return_type: ReturnType::Undiscounted,
            gamma: 0.5,
            steps: 3,
        },
    )
    .expect("undiscounted rollout should succeed");
    assert!((undiscounted.total_return - 27.0).abs() < f64::EPSILON);
    assert_eq!(undiscounted.steps_completed, 3);
    assert!((undiscounted.average_reward - 9.0).abs() < f64::EPSILON);
    assert!((undiscounted.total_cost - 15.0).abs() < f64::EPSILON);
}

#[test]
fn hook_sees_every_step_and_idle_policy_earns_nothing() {
    let mut driver = off_peak_driver();
    let noop = driver.action_space().noop_id();
    let mut seen = Vec::new();

    let metrics = rollout_with_hook(
        &mut driver,
        |_state, _num_actions| noop,
        RolloutParams {
            steps: 5,
            ..RolloutParams::default()
        },
        |step| seen.push(step.state),
    )
    .expect("rollout should succeed");

    assert_eq!(metrics.steps_completed, 5);
    assert_eq!(metrics.total_reward, 0.0);
    assert_eq!(seen.len(), 5);
    assert_eq!(seen.last().copied(), Some(driver.current_state()));
}

#[test]
fn invalid_policy_action_stops_the_rollout() {
    let mut driver = off_peak_driver();
    let err = rollout(
        &mut driver,
        |_state, num_actions| ActionId::from(num_actions),
        RolloutParams::default(),
    )
    .expect_err("policy picked an id outside the space");

    assert!(matches!(err, EnvError::UnknownAction { .. }));
    assert_eq!(Environment::current_state(&driver), State::new(0, 0, 0));
}

#[test]
fn invalid_gamma_is_rejected_before_stepping() {
    for gamma in [f64::NAN, f64::INFINITY, -0.5] {
        let mut driver = off_peak_driver();
        let err = rollout(
            &mut driver,
            |_state, _num_actions| ActionId::from(0),
            RolloutParams {
                return_type: ReturnType::Discounted,
                gamma,
                steps: 3,
            },
        )
        .expect_err("gamma must be finite and non-negative");

        assert!(matches!(err, EnvError::InvalidGamma { .. }));
        assert_eq!(driver.current_state(), State::new(0, 0, 0));
    }
}
