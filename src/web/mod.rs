// Web server — Axum-based backend for the tagging dashboard.
//
// The dashboard page is embedded at compile time via include_dir!.
// /api/* routes serve JSON; every other path serves index.html.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use include_dir::{include_dir, Dir};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::tagging::extractor::AttributeExtractor;
use crate::tagging::traits::Tagger;
use crate::trends::analyzer::TrendAnalyzer;
use crate::trends::traits::TrendDetector;

pub mod handlers;

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Shared application state threaded through all Axum handlers.
///
/// Both analyzers are immutable after construction, so requests share them
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tagger: Arc<dyn Tagger>,
    pub trends: Arc<dyn TrendDetector>,
}

impl AppState {
    /// State backed by the vocabulary tagger and frequency trend analyzer.
    pub fn new(config: Config) -> Self {
        let trends = TrendAnalyzer {
            top_k: config.trend_limit,
        };
        Self {
            config: Arc::new(config),
            tagger: Arc::new(AttributeExtractor::default()),
            trends: Arc::new(trends),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config) -> Result<()> {
    let listener = bind_listener(&config).await?;
    let app = build_router(AppState::new(config));

    info!("Product agent listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind the configured host and port. Host and port go to the resolver
/// separately, so IPv6 literals like `::1` need no brackets.
pub async fn bind_listener(config: &Config) -> Result<TcpListener> {
    let listener = TcpListener::bind((config.bind.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.display_addr()))?;
    Ok(listener)
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/tag", post(handlers::tag::tag_text))
        .route("/api/trends", post(handlers::trends::analyze_trends))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    Router::new()
        .merge(api)
        .route("/", get(index))
        .route("/health", get(health))
        .fallback(index)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve the dashboard page. Also the fallback for every unrouted path.
async fn index() -> Response {
    match ASSETS.get_file("index.html") {
        Some(page) => html_response(page.contents()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from("Dashboard page missing from assets/"),
        )
            .into_response(),
    }
}

fn html_response(contents: &'static [u8]) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        )
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
