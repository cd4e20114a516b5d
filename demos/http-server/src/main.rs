//! Runnable task-tracking HTTP server.
//!
//! Environment:
//! - `TASKD_ADDR` - bind address, default `127.0.0.1:8080`
//! - `TASKD_LOG` - EnvFilter directive, default `info`
//! - `TASKD_LOG_FORMAT` - `text` or `json`, default `text`

use std::sync::Arc;

use anyhow::Context;
use taskd_api::{HttpApi, TaskServiceAdapter};
use taskd_core::TaskService;
use taskd_observe::{LoggerConfig, logger_init};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut cfg = LoggerConfig::default();
    if let Ok(level) = std::env::var("TASKD_LOG") {
        cfg.level = level;
    }
    if let Ok(format) = std::env::var("TASKD_LOG_FORMAT") {
        cfg.format = format.parse()?;
    }
    logger_init(&cfg)?;

    let addr = std::env::var("TASKD_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let service = Arc::new(TaskService::new());
    let handler = Arc::new(TaskServiceAdapter::new(service));
    let router = HttpApi::new(handler).router();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "taskd listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("taskd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
