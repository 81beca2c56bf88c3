use anyhow::{Context, Result};
use clap::Parser;
use resource_actor::tracing::setup_tracing;
use tokio::net::TcpListener;
use users_api::config::Config;
use users_api::http::{routes, AppRegistry};
use users_api::lifecycle::UserSystem;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    setup_tracing(&config.log_level);
    bootstrap(config).await
}

async fn bootstrap(config: Config) -> Result<()> {
    let system = UserSystem::new(config.buffer_size());
    let app = routes(AppRegistry::new(system.store()));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e, error.message = %e, "Unexpected error"
            )
        })?;

    system.shutdown().await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
    tracing::info!("Shutdown signal received");
}
