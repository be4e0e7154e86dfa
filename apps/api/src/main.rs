mod cors;
mod env;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use codegen_api::{CodegenConfig, EnvSnapshot};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::env::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Variables already present in the environment win over `.env`.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let env: Env = envy::from_env()?;

    let _sentry = env.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let config = env.codegen_config(Arc::new(EnvSnapshot::from_process()))?;
    config.credentials.log_configured_selectors();

    let app = app(config, &env.allowed_origins);

    let listener = tokio::net::TcpListener::bind(env.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "server_listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn app(config: CodegenConfig, allowed_origins: &[String]) -> Router {
    codegen_api::router(config)
        .route(
            "/openapi.json",
            get(|| async { Json(codegen_api::openapi()) }),
        )
        .layer(cors::cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed_to_listen_for_shutdown_signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown_signal_received");
}
