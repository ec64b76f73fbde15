//! Sales Predict - веб форма для предсказания продаж по рекламному бюджету

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod preprocessing;
pub mod types;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::*;
pub use preprocessing::*;
pub use types::*;
pub use web::{build_router, AppState};
