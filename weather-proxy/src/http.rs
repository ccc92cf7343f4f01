//! Inbound HTTP API: `POST /weather`.

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use weather_proxy_core::{ErrorBody, ProxyError, WeatherProxyHandler, WeatherRequest, WeatherResponse};

/// Build the service router around a shared handler.
pub fn router(handler: WeatherProxyHandler) -> Router {
    Router::new()
        .route("/weather", post(post_weather))
        .with_state(handler)
}

async fn post_weather(
    State(handler): State<WeatherProxyHandler>,
    body: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let Json(request) = body?;
    let response = handler.handle(&request).await?;
    Ok(Json(response))
}

/// Renders a [`ProxyError`] as `{ "detail": ... }` with its status.
#[derive(Debug)]
pub struct ApiError(ProxyError);

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    // Every body problem, including syntax errors and a missing content type, is a 422.
    fn from(rejection: JsonRejection) -> Self {
        Self(ProxyError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody { detail: self.0.detail() };

        (status, Json(body)).into_response()
    }
}

/// Serve until Ctrl-C.
pub async fn serve(handler: WeatherProxyHandler, bind: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(addr = %listener.local_addr()?, "weather proxy listening");

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("got SIGINT, draining connections");
}
