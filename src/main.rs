use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use clinic_chat_backend::config::Config;
use clinic_chat_backend::routes;
use clinic_chat_backend::services::completion::OpenAiClient;
use clinic_chat_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let backend = Arc::new(OpenAiClient::new(config.api_key.clone(), config.api_base.clone()));
    let state = Arc::new(AppState::new(backend));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("clinic chat backend running at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
