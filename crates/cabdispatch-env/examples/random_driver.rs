use std::path::PathBuf;

use cabdispatch_env::{ActionId, CabDriver, EnvConfig, RolloutParams, rollout_with_hook};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => EnvConfig::from_yaml_path(&path).expect("failed to load driver config"),
        None => EnvConfig::from_default_yaml().expect("failed to parse default driver config"),
    };

    let mut driver = CabDriver::new("random-0", config, 12345).expect("failed to build driver");
    let mut policy_rng = ChaCha8Rng::seed_from_u64(54321);
    let params = RolloutParams::default();

    info!(
        "driver {} starts at {:?} with {} actions",
        driver.driver_id(),
        driver.state_init(),
        driver.action_space().len()
    );

    let mut rides = 0usize;
    let metrics = rollout_with_hook(
        &mut driver,
        |_state, num_actions| ActionId::from(policy_rng.gen_range(0..num_actions)),
        params,
        |step| {
            if step.reward > 0.0 {
                rides += 1;
            }
        },
    )
    .expect("rollout failed");

    println!(
        "steps={} rides={} total_reward={:.1} total_cost={:.1} return={:.3}",
        metrics.steps_completed, rides, metrics.total_reward, metrics.total_cost, metrics.total_return
    );
}
