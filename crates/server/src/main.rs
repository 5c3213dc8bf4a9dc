use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use server_api::{ApiContext, ScreenParams};
use shared::{
    error::ErrorCode,
    protocol::{ActionResponse, ScreenEnvelope},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, Settings};

#[derive(Clone)]
struct AppState {
    api: ApiContext,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;
    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api = ApiContext::default();
    let screens: Vec<String> = api.screens.routes().collect();
    let app = build_router(Arc::new(AppState { api }), &settings)?;

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, ?screens, "bff server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, settings: &Settings) -> anyhow::Result<Router> {
    Ok(Router::new()
        .route("/healthz", get(healthz))
        .route("/bff/:area/:screen", get(get_screen))
        .route("/bff/:area/:screen/action", post(post_action))
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(cors_layer(&settings.allow_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(allow_origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = match allow_origin.trim() {
        "*" => AllowOrigin::any(),
        exact => AllowOrigin::exact(
            HeaderValue::from_str(exact)
                .with_context(|| format!("invalid allow_origin '{exact}'"))?,
        ),
    };
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn get_screen(
    State(state): State<Arc<AppState>>,
    Path((area, screen)): Path<(String, String)>,
    Query(query): Query<BTreeMap<String, String>>,
) -> (StatusCode, Json<ScreenEnvelope>) {
    let params = ScreenParams::from(query);
    match state.api.render_screen(&area, &screen, &params) {
        Some(envelope) => (StatusCode::OK, Json(envelope)),
        None => {
            warn!(%area, %screen, "unknown screen requested");
            let message = format!("Unknown screen: {area}/{screen}");
            (StatusCode::NOT_FOUND, Json(ScreenEnvelope::error(screen, message)))
        }
    }
}

/// The dispatcher is shared by every screen; `area/screen` only scope the URL.
async fn post_action(
    State(state): State<Arc<AppState>>,
    Path((area, screen)): Path<(String, String)>,
    body: Bytes,
) -> (StatusCode, Json<ActionResponse>) {
    match state.api.handle_action(&body) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(err) => {
            let status = match err.code() {
                code if code.is_malformed_request() => StatusCode::BAD_REQUEST,
                ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::OK,
            };
            if status != StatusCode::OK {
                warn!(%area, %screen, %err, %status, "action request failed");
            }
            (status, Json(ActionResponse::from(err)))
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
