/// ML модели

pub mod loader;
pub mod regression;

pub use loader::{load_model, ModelStatus};
pub use regression::{LinearRegressionModel, ModelArtifact, Predictor};
