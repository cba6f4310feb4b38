use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use shroud::config::AppConfig;
use shroud::handlers;
use shroud::services::persona::Persona;
use shroud::services::silhouette::http::HttpSilhouette;
use shroud::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let persona = match Persona::from_file(Path::new(&config.persona_file)) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, file = %config.persona_file, "persona unavailable, using fallback wording");
            Persona::default()
        }
    };

    tracing::info!(silhouette = %config.silhouette_base, "connecting to Silhouette");
    let silhouette = HttpSilhouette::new(&config.silhouette_base)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        silhouette: Box::new(silhouette),
        persona,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/integrations/webchat", post(handlers::webchat::webchat))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
