/// Модуль предобработки данных

pub mod feature_engineering;
pub mod normalization;

pub use feature_engineering::FeatureEngineer;
pub use normalization::{DataNormalizer, ScalerParams};
