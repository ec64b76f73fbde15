/// Веб интерфейс: форма, результат и JSON API

pub mod handlers;
pub mod render;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::models::ModelStatus;

#[derive(Clone)]
pub struct AppState {
    pub model: ModelStatus,
    pub model_file: String,
}

impl AppState {
    pub fn new(model: ModelStatus, model_file: impl Into<String>) -> Self {
        Self {
            model,
            model_file: model_file.into(),
        }
    }

    pub fn model_error(&self) -> Option<String> {
        match self.model {
            ModelStatus::Loaded(_) => None,
            ModelStatus::Unavailable(ref reason) => Some(reason.clone()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict_form))
        .route("/api/predict", post(handlers::predict_api))
        .layer(cors)
        .with_state(state)
}
