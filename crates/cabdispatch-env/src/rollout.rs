use log::debug;
use serde::{Deserialize, Serialize};

use crate::{ActionId, EnvError, Environment, State, Step};

/// Controls how step rewards are aggregated into a return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Sum rewards weighted by `gamma^k`.
    #[default]
    Discounted,
    /// Sum raw rewards.
    Undiscounted,
}

/// Rollout parameters. The environment never terminates, so `steps` is the horizon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutParams {
    pub return_type: ReturnType,
    pub gamma: f64,
    pub steps: usize,
}

impl Default for RolloutParams {
    fn default() -> Self {
        RolloutParams {
            return_type: ReturnType::Discounted,
            gamma: 0.95,
            steps: 168,
        }
    }
}

impl RolloutParams {
    /// Reject discount factors that would poison the return.
    pub fn validate(&self) -> Result<(), EnvError> {
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(EnvError::InvalidGamma { gamma: self.gamma });
        }
        Ok(())
    }
}

/// Aggregate metrics for a complete rollout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolloutMetrics {
    pub steps_completed: usize,
    pub total_reward: f64,
    pub total_cost: f64,
    /// Return under the requested `ReturnType`.
    pub total_return: f64,
    pub average_reward: f64,
}

impl RolloutMetrics {
    fn record(&mut self, step: &Step, discount: f64) {
        self.steps_completed += 1;
        self.total_reward += step.reward;
        self.total_cost += step.cost;
        self.total_return += discount * step.reward;
        self.average_reward = self.total_reward / self.steps_completed as f64;
    }
}

/// Run `policy` from the environment's current state for `params.steps` steps.
///
/// The policy receives the current state and the action count and must
/// return an id in `[0, num_actions)`. The environment is not reset first.
pub fn rollout<E, FPolicy>(
    env: &mut E,
    policy: FPolicy,
    params: RolloutParams,
) -> Result<RolloutMetrics, EnvError>
where
    E: Environment + ?Sized,
    FPolicy: FnMut(&State, usize) -> ActionId,
{
    rollout_with_hook(env, policy, params, |_| {})
}

/// Run a rollout and invoke a callback after each completed step.
pub fn rollout_with_hook<E, FPolicy, FHook>(
    env: &mut E,
    mut policy: FPolicy,
    params: RolloutParams,
    mut on_step: FHook,
) -> Result<RolloutMetrics, EnvError>
where
    E: Environment + ?Sized,
    FPolicy: FnMut(&State, usize) -> ActionId,
    FHook: FnMut(&Step),
{
    params.validate()?;

    let mut metrics = RolloutMetrics::default();
    let mut discount = 1.0;

    for _ in 0..params.steps {
        let state = env.current_state();
        let action_id = policy(&state, env.num_actions());
        let step = env.step_action(action_id)?;

        metrics.record(&step, discount);
        if params.return_type == ReturnType::Discounted {
            discount *= params.gamma;
        }

        on_step(&step);
    }

    debug!(
        "rollout finished: steps={} reward={} return={}",
        metrics.steps_completed, metrics.total_reward, metrics.total_return
    );
    Ok(metrics)
}
