use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for model loading and action prediction.
pub enum AgentError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported model file '{path}'; expected .json, .yaml or .yml")]
    UnsupportedFormat { path: String },

    #[error("model must score at least one action")]
    EmptyModel,

    #[error("weight row {row} has {got} inputs, expected {expected}")]
    RaggedWeights {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("bias has {got} entries, expected one per action ({expected})")]
    BiasLength { expected: usize, got: usize },

    #[error("model produced or contains a non-finite value")]
    NonFinite,

    #[error("model expects {expected} input features, got {got}")]
    FeatureWidth { expected: usize, got: usize },

    #[error("{got} action labels given for {expected} actions")]
    LabelCount { expected: usize, got: usize },
}
