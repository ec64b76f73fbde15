//! HTTP обработчики

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use chrono::Utc;

use crate::error::AppError;
use crate::types::{BudgetForm, BudgetInput, ErrorOutput, HealthOutput, PredictionOutput};
use crate::web::render::{self, FormValues};
use crate::web::AppState;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ModelUnavailable { .. }
            | AppError::ArtifactMissing { .. }
            | AppError::ArtifactIo(_)
            | AppError::ArtifactFormat(_)
            | AppError::InvalidArtifact { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Prediction { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorOutput {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::render_form_page(
        &state.model_file,
        state.model_error().as_deref(),
        &FormValues::from(&BudgetInput::default()),
        None,
    ))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthOutput> {
    let model = state.model.predictor().ok().map(|p| p.name().to_string());
    Json(HealthOutput {
        status: "ok".to_string(),
        model_loaded: model.is_some(),
        model,
    })
}

/// Отправка HTML формы
pub async fn predict_form(
    State(state): State<AppState>,
    Form(form): Form<BudgetForm>,
) -> (StatusCode, Html<String>) {
    let predictor = match state.model.predictor() {
        Ok(predictor) => predictor,
        Err(e) => {
            tracing::warn!("Predict requested without a model: {}", e);
            let page = render::render_form_page(
                &state.model_file,
                state.model_error().as_deref(),
                &FormValues::from(&form),
                None,
            );
            return (e.status_code(), Html(page));
        }
    };

    let input = match form.parse() {
        Ok(input) => input,
        Err(e) => {
            tracing::info!("Rejected form input: {}", e);
            let page = render::render_form_page(
                &state.model_file,
                None,
                &FormValues::from(&form),
                Some(&e.to_string()),
            );
            return (e.status_code(), Html(page));
        }
    };

    tracing::info!(
        "Predict request: youtube={} tiktok={} instagram={}",
        input.youtube,
        input.tiktok,
        input.instagram
    );

    match predictor.predict_one(&input) {
        Ok(predicted_sales) => {
            tracing::info!("Predicted sales: {:.2}", predicted_sales);
            (
                StatusCode::OK,
                Html(render::render_result_page(&state.model_file, &input, predicted_sales)),
            )
        }
        Err(e) => {
            tracing::error!("Prediction error: {}", e);
            (
                e.status_code(),
                Html(render::render_prediction_error_page(
                    &state.model_file,
                    &input,
                    &e.to_string(),
                )),
            )
        }
    }
}

/// JSON вариант того же предсказания
pub async fn predict_api(
    State(state): State<AppState>,
    Json(input): Json<BudgetInput>,
) -> Result<Json<PredictionOutput>, AppError> {
    let predictor = state.model.predictor()?;
    input.validate()?;

    let predicted_sales = predictor.predict_one(&input).map_err(|e| {
        tracing::error!("Prediction error: {}", e);
        e
    })?;

    Ok(Json(PredictionOutput {
        predicted_sales,
        input,
        model: predictor.name().to_string(),
        predicted_at: Utc::now(),
    }))
}
