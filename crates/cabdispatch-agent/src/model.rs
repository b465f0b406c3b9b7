use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::AgentError;

/// Scores every action for one feature vector.
pub trait ActionValueModel {
    /// Return how many actions the model scores.
    fn num_actions(&self) -> usize;

    /// Return one value per action, in action-id order.
    fn action_values(&self, features: &[f64]) -> Result<Vec<f64>, AgentError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Linear action-value model: `q[a] = weights[a] . x + bias[a]`.
pub struct LinearQModel {
    /// One row per action, one column per input feature.
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

impl LinearQModel {
    pub fn new(weights: Vec<Vec<f64>>, bias: Vec<f64>) -> Result<Self, AgentError> {
        let model = Self { weights, bias };
        model.validate()?;
        Ok(model)
    }

    pub fn from_json_str(json: &str) -> Result<Self, AgentError> {
        let model: LinearQModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, AgentError> {
        let model: LinearQModel = serde_yaml::from_str(yaml)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model document, picking the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            Some("yaml" | "yml") => Self::from_yaml_str(&fs::read_to_string(path)?),
            _ => Err(AgentError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Number of input features each row expects.
    pub fn input_width(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    pub fn validate(&self) -> Result<(), AgentError> {
        if self.weights.is_empty() {
            return Err(AgentError::EmptyModel);
        }

        let expected = self.input_width();
        for (row, weights) in self.weights.iter().enumerate() {
            if weights.len() != expected {
                return Err(AgentError::RaggedWeights {
                    row,
                    expected,
                    got: weights.len(),
                });
            }
        }

        if self.bias.len() != self.weights.len() {
            return Err(AgentError::BiasLength {
                expected: self.weights.len(),
                got: self.bias.len(),
            });
        }

        let all_finite = self
            .weights
            .iter()
            .flatten()
            .chain(&self.bias)
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(AgentError::NonFinite);
        }

        Ok(())
    }
}

impl ActionValueModel for LinearQModel {
    fn num_actions(&self) -> usize {
        self.weights.len()
    }

    fn action_values(&self, features: &[f64]) -> Result<Vec<f64>, AgentError> {
        if features.len() != self.input_width() {
            return Err(AgentError::FeatureWidth {
                expected: self.input_width(),
                got: features.len(),
            });
        }

        Ok(self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                row.iter()
                    .zip(features)
                    .map(|(weight, x)| weight * x)
                    .sum::<f64>()
                    + bias
            })
            .collect())
    }
}
