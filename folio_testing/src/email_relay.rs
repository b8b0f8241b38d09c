use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};

const SEND_ROUTE: &str = "/send";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting email relay testing server on {host}:{port}");
    info!("Email relay endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Api key: {api_key:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key.into()))
        .await
        .context("Failed to start HTTP server")
}

fn router(api_key: Arc<str>) -> Router<()> {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(api_key)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendRequest {
    to: String,
    from: String,
    subject: String,
    html: String,
    reply_to: String,
}

async fn send(
    State(api_key): State<Arc<str>>,
    headers: HeaderMap,
    Json(request): Json<SendRequest>,
) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| x.strip_prefix("Bearer "))
        .is_some_and(|x| x == &*api_key);
    if !authorized {
        warn!("rejected email with invalid api key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "error": "Unauthorized"})),
        )
            .into_response();
    }

    info!(
        to = %request.to,
        from = %request.from,
        reply_to = %request.reply_to,
        subject = %request.subject,
        "received email"
    );
    info!("{}", request.html);

    Json(json!({"success": true})).into_response()
}
