//! Log handlers - ingest and dump.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::info;

use crate::error::HttpError;
use crate::state::AppState;

/// Append one record for `id`.
///
/// The body is decoded permissively; unrecognised bodies are stored as
/// unknown-type records, never rejected.
pub async fn put_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, HttpError> {
    state.logs.ingest(&id, &body).await?;
    Ok(StatusCode::OK)
}

/// Return the full log file content, verbatim.
pub async fn get_logs(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let content = state.logs.dump().await?;

    if state.echo_dump {
        info!(target: "monitor.dump", "{}", String::from_utf8_lossy(&content));
    }

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        content,
    ))
}
