use anyhow::Result;
use std::sync::Arc;

use frame_usage_core::FrameConfig;
use frame_usage_http::{create_router, AppState};
use frame_usage_hub::{HttpHubClient, HubClient};
use frame_usage_render::Rasterizer;
use frame_usage_service::StatsService;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = FrameConfig::from_env();

    let stats_service = match config.hub_url.as_deref() {
        Some(hub_url) => {
            let client = HttpHubClient::new(hub_url, config.hub_timeout)?;
            tracing::info!(timeout = ?config.hub_timeout, "Using hub at {}", client.base_url());
            let hub: Arc<dyn HubClient> = Arc::new(client);
            Some(Arc::new(StatsService::new(hub)))
        },
        None => {
            tracing::warn!("HUB_URL not set, frame actions will fail");
            None
        },
    };

    let rasterizer = Arc::new(Rasterizer::new(config.font_dir.as_deref()));
    match rasterizer.font_count() {
        0 => tracing::warn!("no fonts found, text will be missing from rendered images"),
        faces => tracing::info!(faces, "font database loaded"),
    }
    let state = Arc::new(AppState { stats_service, rasterizer, public_url: config.public_url });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            },
            Err(e) => {
                tracing::warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
