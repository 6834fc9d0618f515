//! File listing and raw content endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::render::escape_html;
use crate::state::AppState;

/// Query parameters for the `/file` and `/review` endpoints.
///
/// `path` is optional so a missing parameter reaches the handler and gets
/// the documented 400 message instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: Option<String>,
}

fn encode_query_value(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `GET /` and `GET /filelist` — HTML index of the file list.
pub async fn list_files(State(state): State<AppState>) -> Html<String> {
    let items: String = state
        .files
        .iter()
        .map(|file| {
            let encoded = encode_query_value(file);
            format!(
                "<li><a href=\"/review?path={}\">{}</a> <a href=\"/file?path={}\">[raw]</a></li>\n",
                encoded,
                escape_html(file),
                encoded
            )
        })
        .collect();

    Html(format!("<h1>File List</h1>\n<ul>\n{}</ul>\n", items))
}

/// `GET /files` — the file list as a JSON array, in document order.
pub async fn list_files_json(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.files.as_ref().clone())
}

/// `GET /file?path=…` — raw file contents as plain text.
///
/// The path comes straight from the caller and is handed to the filesystem
/// unchecked; read failures surface as a 500 with the OS message.
pub async fn get_raw_file(Query(query): Query<PathQuery>) -> Response {
    let Some(path) = query.path else {
        return (StatusCode::BAD_REQUEST, "File path is required").into_response();
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error reading file {}: {}", path, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading file: {}", e),
            )
                .into_response()
        }
    }
}
