use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tracing::info;

mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;
mod views;

#[cfg(test)]
mod test_support;

use config::Config;
use models::AppState;
use utils::QflowClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    utils::init_tracing();

    let config = Config::load()?;
    let client = QflowClient::new(&config.api_base_url);
    let templates = views::load_templates().context("Failed to load page templates")?;

    info!("QFlow backend: {}", client.base_url());
    info!(
        "Token endpoint: {}, registration endpoint: {}",
        config.tokens_path, config.patient_register_path
    );

    let address = format!("0.0.0.0:{}", config.port);
    let shared_state = Arc::new(AppState {
        client,
        config,
        templates,
    });
    let app = api::router(shared_state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("🚀 Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
