//! Feature engineering для модели продаж

use ndarray::Array2;

use crate::error::{AppError, Result};
use crate::types::{BudgetInput, CHANNELS};

pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Матрица признаков: строка на каждый ввод, столбцы в порядке `features`
    pub fn budget_features(inputs: &[BudgetInput], features: &[String]) -> Result<Array2<f64>> {
        if inputs.is_empty() {
            return Err(AppError::prediction("No inputs provided"));
        }

        let mut matrix = Array2::zeros((inputs.len(), features.len()));

        for (j, name) in features.iter().enumerate() {
            for (i, input) in inputs.iter().enumerate() {
                matrix[[i, j]] = input.channel(name).ok_or_else(|| {
                    AppError::prediction(format!(
                        "unknown feature column '{}'; the model must be trained on columns ({})",
                        name,
                        CHANNELS.join(", ")
                    ))
                })?;
            }
        }

        Ok(matrix)
    }
}
