//! HTTP surface of the sensor array.
//!
//! Two routes: a landing page and the JSON data endpoint. The router holds
//! the shared [`SensorArray`] as axum state.

pub mod handlers;

use crate::config::HttpConfig;
use crate::error::Result;
use crate::sensors::SensorArray;
use axum::Router;
use axum::routing::get;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Build the router over the shared sensor array.
pub fn router(array: Arc<SensorArray>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sensor/data", get(handlers::sensor_data))
        .with_state(array)
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn serve(config: &HttpConfig, array: Arc<SensorArray>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router(array))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => log::error!("Failed to listen for shutdown signal: {e}"),
    }
}
