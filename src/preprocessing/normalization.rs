//! Нормализация данных

#![allow(non_snake_case)]

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Параметры StandardScaler, сохраненные вместе с моделью
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

pub struct DataNormalizer {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl DataNormalizer {
    /// Восстановление обученного нормализатора из артефакта
    pub fn from_params(params: &ScalerParams, n_features: usize) -> Result<Self> {
        if params.mean.len() != n_features || params.std.len() != n_features {
            return Err(AppError::invalid_artifact(format!(
                "scaler expects {} features, got mean={} std={}",
                n_features,
                params.mean.len(),
                params.std.len()
            )));
        }
        if params.mean.iter().any(|v| !v.is_finite()) {
            return Err(AppError::invalid_artifact("scaler mean must be finite"));
        }
        // Деление на ноль недопустимо
        if params.std.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(AppError::invalid_artifact(
                "scaler std must be finite and positive",
            ));
        }

        Ok(Self {
            mean: Array1::from(params.mean.clone()),
            std: Array1::from(params.std.clone()),
        })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, X: &Array2<f64>) -> Result<Array2<f64>> {
        if X.ncols() != self.n_features() {
            return Err(AppError::prediction(format!(
                "scaler expects {} columns, got {}",
                self.n_features(),
                X.ncols()
            )));
        }

        // Нормализация: (X - mean) / std
        let mut normalized = X.clone();
        for mut row in normalized.rows_mut() {
            for (i, val) in row.iter_mut().enumerate() {
                *val = (*val - self.mean[i]) / self.std[i];
            }
        }

        Ok(normalized)
    }
}
