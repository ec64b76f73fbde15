//! Ошибки приложения

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("model file '{path}' not found")]
    ArtifactMissing { path: String },

    #[error("failed to read model file: {0}")]
    ArtifactIo(#[from] std::io::Error),

    #[error("failed to parse model file: {0}")]
    ArtifactFormat(#[from] serde_json::Error),

    #[error("invalid model artifact: {message}")]
    InvalidArtifact { message: String },

    #[error("invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("prediction failed: {message}")]
    Prediction { message: String },

    #[error("model is not available: {reason}")]
    ModelUnavailable { reason: String },
}

impl AppError {
    pub fn invalid_artifact(message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            message: message.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
