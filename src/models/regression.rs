//! Линейная регрессия продаж по рекламным бюджетам

#![allow(non_snake_case)]

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::preprocessing::{DataNormalizer, FeatureEngineer, ScalerParams};
use crate::types::BudgetInput;

/// Всё, что умеет предсказывать продажи по бюджету
pub trait Predictor: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, inputs: &[BudgetInput]) -> Result<Array1<f64>>;

    /// Предсказание для одной строки
    fn predict_one(&self, input: &BudgetInput) -> Result<f64> {
        let predictions = self.predict(std::slice::from_ref(input))?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| AppError::prediction("model returned no predictions"))
    }
}

/// Артефакт модели в том виде, в каком он лежит на диске
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_model_name")]
    pub name: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<ScalerParams>,
}

fn default_model_name() -> String {
    "linear-regression".to_string()
}

pub struct LinearRegressionModel {
    name: String,
    features: Vec<String>,
    weights: Array1<f64>,
    bias: f64,
    normalizer: Option<DataNormalizer>,
}

impl LinearRegressionModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        let n_features = artifact.features.len();

        if n_features == 0 {
            return Err(AppError::invalid_artifact("model has no features"));
        }
        if artifact.coefficients.len() != n_features {
            return Err(AppError::invalid_artifact(format!(
                "{} features but {} coefficients",
                n_features,
                artifact.coefficients.len()
            )));
        }
        if artifact.coefficients.iter().any(|w| !w.is_finite()) || !artifact.intercept.is_finite()
        {
            return Err(AppError::invalid_artifact("coefficients must be finite"));
        }

        let normalizer = artifact
            .scaler
            .as_ref()
            .map(|params| DataNormalizer::from_params(params, n_features))
            .transpose()?;

        Ok(Self {
            name: artifact.name,
            features: artifact.features,
            weights: Array1::from(artifact.coefficients),
            bias: artifact.intercept,
            normalizer,
        })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }
}

impl Predictor for LinearRegressionModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, inputs: &[BudgetInput]) -> Result<Array1<f64>> {
        let X = FeatureEngineer::budget_features(inputs, &self.features)?;

        let X = match self.normalizer {
            Some(ref normalizer) => normalizer.transform(&X)?,
            None => X,
        };

        // y = X·w + b
        let predictions = X.dot(&self.weights) + self.bias;

        if predictions.iter().any(|y| !y.is_finite()) {
            return Err(AppError::prediction("model produced a non-finite value"));
        }

        Ok(predictions)
    }
}
