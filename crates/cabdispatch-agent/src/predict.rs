use cabdispatch_env::State;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{ActionValueModel, AgentError};

/// Body served on the liveness route.
pub const HOME_MESSAGE: &str = "DQN Agent API is running!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// `POST /predict` body: `{"state": [city, hour, day]}`.
pub struct PredictRequest {
    pub state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Chosen action id and the label it is published under.
pub struct PredictResponse {
    pub action: usize,
    pub action_name: i64,
}

/// Greedy action selection over a pre-trained action-value model.
#[derive(Debug, Clone)]
pub struct Predictor<M> {
    model: M,
    action_labels: Vec<i64>,
}

impl<M: ActionValueModel> Predictor<M> {
    /// Label every action with its own id.
    pub fn new(model: M) -> Self {
        let action_labels = (0..model.num_actions() as i64).collect();
        Self {
            model,
            action_labels,
        }
    }

    /// Publish actions under custom labels, one per scored action.
    pub fn with_labels(model: M, action_labels: Vec<i64>) -> Result<Self, AgentError> {
        if action_labels.len() != model.num_actions() {
            return Err(AgentError::LabelCount {
                expected: model.num_actions(),
                got: action_labels.len(),
            });
        }
        Ok(Self {
            model,
            action_labels,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn action_labels(&self) -> &[i64] {
        &self.action_labels
    }

    /// Score `state` and pick the highest-valued action; ties go to the lowest id.
    pub fn predict(&self, state: &State) -> Result<PredictResponse, AgentError> {
        let values = self.model.action_values(&state_features(state))?;
        let action = argmax(&values)?;
        let action_name =
            self.action_labels
                .get(action)
                .copied()
                .ok_or(AgentError::LabelCount {
                    expected: values.len(),
                    got: self.action_labels.len(),
                })?;

        debug!("predicted action {action} ({action_name}) for {state:?}");
        Ok(PredictResponse {
            action,
            action_name,
        })
    }
}

/// Model input for a state: `[city, hour, day]` as floats.
pub fn state_features(state: &State) -> [f64; 3] {
    [state.city as f64, state.hour as f64, state.day as f64]
}

fn argmax(values: &[f64]) -> Result<usize, AgentError> {
    if values.iter().any(|value| value.is_nan()) {
        return Err(AgentError::NonFinite);
    }

    let mut best = None;
    for (idx, value) in values.iter().copied().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((idx, value)),
        }
    }

    best.map(|(idx, _)| idx).ok_or(AgentError::EmptyModel)
}

/// Handle a `POST /predict` JSON body and render the JSON response.
pub fn handle_predict<M: ActionValueModel>(
    predictor: &Predictor<M>,
    body: &str,
) -> Result<String, AgentError> {
    let request: PredictRequest = serde_json::from_str(body)?;
    let response = predictor.predict(&request.state)?;
    Ok(serde_json::to_string(&response)?)
}

/// Handle `GET /`.
pub fn home() -> &'static str {
    HOME_MESSAGE
}
