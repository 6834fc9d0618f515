//! HTTP routes
//!
//! Route handlers compose the loader, reader, reviewer, and renderer into
//! responses. Anything not matched by a route falls through to static
//! asset serving.

pub mod files;
pub mod review;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(files::list_files))
        .route("/filelist", get(files::list_files))
        .route("/files", get(files::list_files_json))
        .route("/file", get(files::get_raw_file))
        .route("/review", get(review::get_review))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
