/// Типы данных для формы и API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Значение по умолчанию для каждого поля формы
pub const DEFAULT_BUDGET: f64 = 50.0;

/// Имена каналов в том порядке, в котором модель обучалась
pub const CHANNELS: [&str; 3] = ["youtube", "tiktok", "instagram"];

/// Бюджет на рекламу по трём каналам (одна строка для предсказания)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    pub youtube: f64,
    pub tiktok: f64,
    pub instagram: f64,
}

impl BudgetInput {
    pub fn new(youtube: f64, tiktok: f64, instagram: f64) -> Self {
        Self {
            youtube,
            tiktok,
            instagram,
        }
    }

    /// Значение канала по имени признака (без учета регистра)
    pub fn channel(&self, name: &str) -> Option<f64> {
        match name.trim().to_ascii_lowercase().as_str() {
            "youtube" => Some(self.youtube),
            "tiktok" => Some(self.tiktok),
            "instagram" => Some(self.instagram),
            _ => None,
        }
    }

    pub fn channels(&self) -> [(&'static str, f64); 3] {
        [
            (CHANNELS[0], self.youtube),
            (CHANNELS[1], self.tiktok),
            (CHANNELS[2], self.instagram),
        ]
    }

    /// Каждое поле должно быть конечным и неотрицательным
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.channels() {
            if !value.is_finite() {
                return Err(AppError::invalid_input(field, "must be a number"));
            }
            if value < 0.0 {
                return Err(AppError::invalid_input(
                    field,
                    format!("must be greater than or equal to 0, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for BudgetInput {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET, DEFAULT_BUDGET, DEFAULT_BUDGET)
    }
}

/// Сырые значения формы: браузер присылает строки
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetForm {
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub tiktok: String,
    #[serde(default)]
    pub instagram: String,
}

impl BudgetForm {
    pub fn parse(&self) -> Result<BudgetInput> {
        let input = BudgetInput::new(
            parse_field("youtube", &self.youtube)?,
            parse_field("tiktok", &self.tiktok)?,
            parse_field("instagram", &self.instagram)?,
        );
        input.validate()?;
        Ok(input)
    }
}

fn parse_field(field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::invalid_input(field, format!("'{}' is not a number", raw.trim())))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutput {
    pub predicted_sales: f64,
    pub input: BudgetInput,
    pub model: String,
    pub predicted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthOutput {
    pub status: String,
    pub model_loaded: bool,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_fifty() {
        let input = BudgetInput::default();
        assert_eq!(input, BudgetInput::new(50.0, 50.0, 50.0));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_channel_lookup_ignores_case() {
        let input = BudgetInput::new(1.0, 2.0, 3.0);
        assert_eq!(input.channel("YouTube"), Some(1.0));
        assert_eq!(input.channel("tiktok"), Some(2.0));
        assert_eq!(input.channel(" Instagram "), Some(3.0));
        assert_eq!(input.channel("facebook"), None);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = BudgetInput::new(10.0, -0.5, 0.0).validate().unwrap_err();
        match err {
            AppError::InvalidInput { field, .. } => assert_eq!(field, "tiktok"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_budget_accepted() {
        assert!(BudgetInput::new(0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_non_finite_budget_rejected() {
        assert!(BudgetInput::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(BudgetInput::new(1.0, f64::INFINITY, 1.0).validate().is_err());
    }

    #[test]
    fn test_form_parse() {
        let form = BudgetForm {
            youtube: "120.50".to_string(),
            tiktok: " 30 ".to_string(),
            instagram: "0".to_string(),
        };
        assert_eq!(form.parse().unwrap(), BudgetInput::new(120.5, 30.0, 0.0));
    }

    #[test]
    fn test_form_parse_rejects_garbage_and_negative() {
        let garbage = BudgetForm {
            youtube: "abc".to_string(),
            tiktok: "1".to_string(),
            instagram: "1".to_string(),
        };
        assert!(matches!(garbage.parse(), Err(AppError::InvalidInput { .. })));

        let negative = BudgetForm {
            youtube: "1".to_string(),
            tiktok: "1".to_string(),
            instagram: "-5".to_string(),
        };
        assert!(matches!(negative.parse(), Err(AppError::InvalidInput { .. })));
    }
}
