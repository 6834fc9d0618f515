//! Code review endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::files::PathQuery;
use crate::render::{escape_html, markdown_to_html};
use crate::state::AppState;

/// `GET /review?path=…` — HTML page with the raw file contents and an
/// LLM-generated review.
///
/// Read errors share the `/file` contract. A failed review call does not
/// fail the page; the review section carries the fallback text instead.
pub async fn get_review(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Response {
    let Some(path) = query.path else {
        return (StatusCode::BAD_REQUEST, "File path is required").into_response();
    };

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Error reading file {}: {}", path, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading file: {}", e),
            )
                .into_response();
        }
    };

    let review = state.reviewer.review(&content).await;
    let review_html = markdown_to_html(&review);

    Html(format!(
        "<h1>File: {}</h1>\n<pre>{}</pre>\n<h2>Code Review:</h2>\n{}\n<a href=\"/\">Back to file list</a>\n",
        escape_html(&path),
        escape_html(&content),
        review_html
    ))
    .into_response()
}
