use actuation_stub::config::StubConfig;
use actuation_stub::server::{shutdown_channel, wait_for_signal, ReadinessState, StubServer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = StubConfig::from_env()?;
    info!(
        port = config.port,
        devices = ?config.device_ids,
        initial_ready = config.initial_ready,
        "Starting accelerator actuation stub"
    );

    let (shutdown_controller, shutdown_signal) = shutdown_channel();
    let readiness = ReadinessState::with_initial(config.initial_ready);

    let server = StubServer::bind(config.socket_addr(), readiness, &config.device_ids)
        .await?
        .with_grace_period(config.grace_period);

    // Fire shutdown on SIGTERM/SIGINT
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => info!(signal = signal, "Initiating graceful shutdown"),
            Err(e) => error!(error = %e, "Failed to wait for termination signal, shutting down"),
        }
        shutdown_controller.shutdown();
    });

    server.serve(shutdown_signal).await?;

    info!("Accelerator actuation stub shut down gracefully");
    Ok(())
}
