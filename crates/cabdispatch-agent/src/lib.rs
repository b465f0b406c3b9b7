mod error;
mod model;
mod predict;

pub use error::AgentError;
pub use model::{ActionValueModel, LinearQModel};
pub use predict::{
    HOME_MESSAGE, PredictRequest, PredictResponse, Predictor, handle_predict, home,
    state_features,
};
