use std::net::IpAddr;

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

const WEBHOOK_ROUTE: &str = "/webhook";

pub async fn start_server(host: IpAddr, port: u16, status: u16) -> anyhow::Result<()> {
    let status = StatusCode::from_u16(status).context("Invalid status code")?;

    info!("Starting webhook testing server on {host}:{port}");
    info!("Webhook url: http://{host}:{port}{WEBHOOK_ROUTE}");
    info!("Responding with status {status}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(status))
        .await
        .context("Failed to start HTTP server")
}

fn router(status: StatusCode) -> Router<()> {
    Router::new()
        .route(WEBHOOK_ROUTE, routing::post(receive))
        .with_state(status)
}

async fn receive(State(status): State<StatusCode>, Json(payload): Json<Value>) -> StatusCode {
    let kind = if payload.get("embeds").is_some() {
        "discord"
    } else if payload.get("text").is_some() {
        "slack"
    } else {
        "unknown"
    };
    info!(kind, %payload, "received webhook");
    status
}
