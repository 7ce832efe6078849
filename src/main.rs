use anyhow::{Context, Result};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use webcast_relay::api::create_app;
use webcast_relay::capture::spawn_replay;
use webcast_relay::config;
use webcast_relay::pipeline::Relay;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webcast_relay=info".into()),
        )
        .init();

    info!("Webcast relay starting...");

    let config = config::load_from_env().context("Failed to load configuration")?;
    info!(
        bind = %config.server.bind_address(),
        raw_capacity = config.queue.raw_capacity,
        decoded_capacity = config.queue.decoded_capacity,
        tag_events = config.output.tag_events,
        ingest_enabled = config.capture.ingest_enabled,
        "Configuration loaded"
    );

    let shutdown = CancellationToken::new();
    let relay = Relay::new(&config, shutdown.clone());
    let app = create_app(&relay, &config);

    // Bind before starting workers; a taken port is fatal
    let listener = tokio::net::TcpListener::bind(config.server.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address()))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Subscribers connect to ws://{}", local_addr);

    // Optional offline capture source
    let replay = match &config.capture.replay_file {
        Some(path) => {
            let handle = spawn_replay(
                path.clone(),
                Duration::from_millis(config.capture.replay_interval_ms),
                relay.capture_sink(),
                shutdown.clone(),
            );
            info!(path = %path.display(), "Replay task started");
            Some(handle)
        }
        None => None,
    };

    let tasks = relay.start();

    let server_shutdown = shutdown.clone();
    let server_handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
            .await;
        if let Err(e) = result {
            error!(error = %e, "Relay server error");
        }
    });

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl_c signal")?;
    info!("Shutdown signal received");

    // Graceful shutdown
    shutdown.cancel();
    if let Some(handle) = replay {
        match handle.await {
            Ok(frames) => info!(frames = frames, "Replay stopped"),
            Err(e) => warn!(error = %e, "Replay task did not exit cleanly"),
        }
    }
    if let Err(e) = server_handle.await {
        error!(error = %e, "Relay server task failed");
    }
    tasks.join().await;
    info!("Webcast relay stopped");

    Ok(())
}
