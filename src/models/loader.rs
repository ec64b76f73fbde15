/// Загрузка артефакта модели с диска

use std::path::Path;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::regression::{LinearRegressionModel, ModelArtifact, Predictor};

/// Состояние модели после старта: загружается один раз и дальше только читается
#[derive(Clone)]
pub enum ModelStatus {
    Loaded(Arc<dyn Predictor>),
    Unavailable(String),
}

impl ModelStatus {
    pub fn load(path: &Path) -> Self {
        match load_model(path) {
            Ok(model) => {
                tracing::info!("Model '{}' loaded from {}", model.name(), path.display());
                Self::Loaded(Arc::new(model))
            }
            Err(e) => {
                tracing::error!("Failed to load model from {}: {}", path.display(), e);
                Self::Unavailable(e.to_string())
            }
        }
    }

    pub fn from_predictor(predictor: impl Predictor + 'static) -> Self {
        Self::Loaded(Arc::new(predictor))
    }

    pub fn predictor(&self) -> Result<&Arc<dyn Predictor>> {
        match self {
            Self::Loaded(predictor) => Ok(predictor),
            Self::Unavailable(reason) => Err(AppError::ModelUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

pub fn load_model(path: &Path) -> Result<LinearRegressionModel> {
    if !path.exists() {
        return Err(AppError::ArtifactMissing {
            path: path.display().to_string(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;
    LinearRegressionModel::from_artifact(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BudgetInput;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_artifact(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = write_artifact(
            r#"{
                "name": "budget-model",
                "features": ["youtube", "tiktok", "instagram"],
                "coefficients": [0.1, 0.1, 0.1],
                "intercept": 1.0
            }"#,
        );
        let status = ModelStatus::load(file.path());
        assert!(status.is_loaded());

        let predictor = status.predictor().unwrap();
        assert_eq!(predictor.name(), "budget-model");
        let y = predictor.predict_one(&BudgetInput::new(10.0, 10.0, 10.0)).unwrap();
        assert!((y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model-reg.json");

        assert!(matches!(
            load_model(&path),
            Err(AppError::ArtifactMissing { .. })
        ));

        let status = ModelStatus::load(&path);
        assert!(!status.is_loaded());
        assert!(matches!(
            status.predictor(),
            Err(AppError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn test_malformed_artifact() {
        let file = write_artifact("not json at all");
        assert!(matches!(
            load_model(file.path()),
            Err(AppError::ArtifactFormat(_))
        ));
        assert!(!ModelStatus::load(file.path()).is_loaded());
    }

    #[test]
    fn test_inconsistent_artifact() {
        let file = write_artifact(
            r#"{"features": ["youtube", "tiktok"], "coefficients": [1.0], "intercept": 0.0}"#,
        );
        assert!(matches!(
            load_model(file.path()),
            Err(AppError::InvalidArtifact { .. })
        ));
    }
}
