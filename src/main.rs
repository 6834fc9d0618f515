//! review-web server
//!
//! Loads a compilation database at startup, then serves the file list, raw
//! file contents, and LLM code-review pages over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_web::compile_db;
use review_web::config::Cli;
use review_web::review::{OpenAiClient, Reviewer};
use review_web::routes::build_router;
use review_web::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "review_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load once, before the listener binds; handlers only ever see the
    // completed snapshot. A missing or malformed database is not fatal.
    let db_path = cli.compile_db_path();
    let files = compile_db::load_file_list(&db_path);

    let client = match OpenAiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("{}; review requests will return the fallback text", e);
            OpenAiClient::new(String::new())
        }
    };
    let reviewer = Reviewer::new(Arc::new(client));

    let state = AppState::new(files, reviewer);

    tracing::info!("Serving static files from: {}", cli.static_dir.display());
    let app = build_router(state, &cli.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("review-web running on http://{}", addr);
    tracing::info!("  /          - HTML file list");
    tracing::info!("  /files     - file list as JSON");
    tracing::info!("  /file      - raw file contents (?path=...)");
    tracing::info!("  /review    - code review page (?path=...)");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(format!("Failed to bind to {}: {}", addr, e).into());
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return Err(format!("Server error: {}", e).into());
    }

    Ok(())
}
