// src/bin/app/main.rs

mod errors;
mod handlers;
mod types;

use std::fs;
use std::net::SocketAddr;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use handlers::{
    doc::get_doc, listing::get_listing, ready::is_ready, search::run_search,
    upload::handle_upload,
};
use types::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::new();

    let app = Router::new()
        .route("/", get(index))
        .route("/upload", post(handle_upload))
        .route("/api/search", get(run_search))
        .route("/api/listing", get(get_listing))
        .route("/api/ready", get(is_ready))
        .route("/api/doc", get(get_doc))
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(100 * 1024 * 1024))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!(%addr, "viewer backend listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C handler");
}

async fn index() -> Result<Html<String>, StatusCode> {
    fs::read_to_string("static/index.html")
        .map(Html)
        .map_err(|_| StatusCode::NOT_FOUND)
}
