//! Same-origin fetch proxy.
//!
//! `GET /fetch-form?url=<encoded>` fetches the given URL and returns its body
//! verbatim. The body is not inspected or transformed. Failures come back as
//! `{"error": "..."}` with 400 (no `url`) or 500 (upstream failure).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub const DEFAULT_PORT: u16 = 3000;

pub struct ProxyState {
    client: Client,
}

impl ProxyState {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ProxyState {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[derive(Debug, Deserialize)]
pub struct FetchParams {
    url: Option<String>,
}

/// Build the proxy router. Files under `static_dir`, when given, are served
/// for every other path.
pub fn router(state: Arc<ProxyState>, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/fetch-form", get(fetch_form))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(cors)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn start(
    addr: SocketAddr,
    state: Arc<ProxyState>,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let app = router(state, static_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn fetch_form(
    State(state): State<Arc<ProxyState>>,
    Query(params): Query<FetchParams>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "No URL provided");
    };

    match fetch_upstream(&state.client, &url).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!("Error fetching form {}: {}", url, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch form")
        }
    }
}

// 上游非 2xx 一律視為失敗
async fn fetch_upstream(client: &Client, url: &str) -> reqwest::Result<String> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
