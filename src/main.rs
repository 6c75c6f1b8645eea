//! Title Desk server.
//!
//! Loads configuration from the environment, wires the ClickUp client, token
//! store and LaTeX generator into the HTTP router and serves it until
//! Ctrl+C.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use title_desk::adapters::http::{app_router, AppState, HttpSettings};
use title_desk::adapters::{
    ClickUpClient, InMemoryTokenStore, LatexDocumentGenerator, PdfLatexCompiler,
};
use title_desk::config::AppConfig;
use title_desk::ports::DocumentGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let compiler = PdfLatexCompiler::new()
        .with_program(config.document.compiler_path.clone())
        .with_timeout(config.document.compile_timeout_secs);

    let staging_root = config.document.staging_root();
    let generator = LatexDocumentGenerator::new(
        Arc::new(compiler),
        config.document.template_path.clone(),
        staging_root.clone(),
    )
    .with_max_concurrent(config.document.max_concurrent_compiles);

    if !tokio::fs::try_exists(generator.template_path()).await.unwrap_or(false) {
        tracing::warn!(
            "Template {} not found; PDF generation will fail",
            generator.template_path().display()
        );
    }

    if !generator.is_available().await {
        tracing::warn!(
            "{} is not runnable; PDF generation will fail",
            config.document.compiler_path
        );
    }

    let state = AppState::new(
        Arc::new(ClickUpClient::new(&config.clickup)?),
        Arc::new(InMemoryTokenStore::new()),
        Arc::new(generator),
        HttpSettings {
            frontend_url: config.clickup.frontend_url.clone(),
            title_order_list_id: config.clickup.title_order_list_id.clone(),
            download_file_name: config.document.download_file_name.clone(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        },
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        environment = ?config.server.environment,
        staging = %staging_root.display(),
        "Server running at http://{}",
        addr
    );

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
