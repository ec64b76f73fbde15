/// Веб сервер предсказания продаж

use anyhow::Context;

use sales_predict::{build_router, logging, AppConfig, AppState, ModelStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    logging::init_logging();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Модель загружается один раз; без нее сервер стартует, но форма отключена
    let model = ModelStatus::load(&config.model_path);
    let state = AppState::new(model, config.model_file_name());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Server listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
